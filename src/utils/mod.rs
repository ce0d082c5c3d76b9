pub mod format;
pub mod vector3d;
