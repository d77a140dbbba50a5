pub mod aggregator;
pub mod poisson;
pub mod predictor;
pub mod rates;
pub mod validator;

pub use aggregator::*;
pub use poisson::*;
pub use predictor::*;
pub use rates::*;
pub use validator::*;
