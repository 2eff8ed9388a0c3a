// Domain layer: pet records, fee rules and the roster port. No I/O.

pub mod fee;
pub mod model;
pub mod ports;
