// Domain layer: the calculator, the greeting/summation services, and the
// error-reporting port they share.

pub mod calculator;
pub mod greeting;
pub mod model;
pub mod ports;
pub mod summation;
