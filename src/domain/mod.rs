// Domain layer: the movie record and the ports (interfaces) to the search service.

pub mod model;
pub mod ports;
