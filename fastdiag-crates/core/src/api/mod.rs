mod diagnoser;
pub mod outputs;

pub use diagnoser::Diagnoser;
