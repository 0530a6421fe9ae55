use gs_core::CarId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("{0} has not cleared both stages")]
    IncompleteCar(CarId),
}

pub type StatsResult<T> = Result<T, StatsError>;
