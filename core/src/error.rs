use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Fixture error: {0}")]
    Fixture(#[from] std::io::Error),

    #[error("Unknown person: {id}")]
    UnknownPerson { id: String },

    #[error("Unknown ship: {id}")]
    UnknownShip { id: String },

    #[error("Unknown request: {id}")]
    UnknownRequest { id: String },

    #[error("Request '{id}' already resolved as {status}")]
    RequestAlreadyResolved { id: String, status: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
