pub mod fixed_point_ext;
pub mod path_ext;
