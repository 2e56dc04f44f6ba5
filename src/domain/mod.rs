// Domain layer: transcript models, grade arithmetic and ports (interfaces).

pub mod course;
pub mod grade;
pub mod model;
pub mod ports;
pub mod semester;
pub mod transcript;
