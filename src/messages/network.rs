//! Network messages - communication between App and Network layers

use crate::error::ApiError;
use crate::models::{ExerciseInput, Flow, User, UserInput};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Create a user
    CreateUser { id: u64, input: UserInput },
    /// Fetch the full user list
    ListUsers { id: u64 },
    /// Log an exercise for a user
    CreateExercise { id: u64, input: ExerciseInput },
    /// Shutdown the network actor
    Shutdown,
}

impl NetworkCommand {
    /// Request id, if this command performs a request
    pub fn id(&self) -> Option<u64> {
        match self {
            NetworkCommand::CreateUser { id, .. }
            | NetworkCommand::ListUsers { id }
            | NetworkCommand::CreateExercise { id, .. } => Some(*id),
            NetworkCommand::Shutdown => None,
        }
    }

    pub fn flow(&self) -> Option<Flow> {
        match self {
            NetworkCommand::CreateUser { .. } => Some(Flow::CreateUser),
            NetworkCommand::ListUsers { .. } => Some(Flow::ListUsers),
            NetworkCommand::CreateExercise { .. } => Some(Flow::CreateExercise),
            NetworkCommand::Shutdown => None,
        }
    }
}

/// Responses sent from Network layer to App layer, exactly one per request
#[derive(Debug)]
pub enum NetworkResponse {
    UserCreated {
        id: u64,
        result: Result<User, ApiError>,
        time_ms: u64,
    },
    UsersListed {
        id: u64,
        result: Result<Vec<User>, ApiError>,
        time_ms: u64,
    },
    ExerciseCreated {
        id: u64,
        result: Result<(), ApiError>,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::UserCreated { id, .. } => *id,
            NetworkResponse::UsersListed { id, .. } => *id,
            NetworkResponse::ExerciseCreated { id, .. } => *id,
        }
    }

    pub fn flow(&self) -> Flow {
        match self {
            NetworkResponse::UserCreated { .. } => Flow::CreateUser,
            NetworkResponse::UsersListed { .. } => Flow::ListUsers,
            NetworkResponse::ExerciseCreated { .. } => Flow::CreateExercise,
        }
    }

    pub fn time_ms(&self) -> u64 {
        match self {
            NetworkResponse::UserCreated { time_ms, .. }
            | NetworkResponse::UsersListed { time_ms, .. }
            | NetworkResponse::ExerciseCreated { time_ms, .. } => *time_ms,
        }
    }

    pub fn is_success(&self) -> bool {
        match self {
            NetworkResponse::UserCreated { result, .. } => result.is_ok(),
            NetworkResponse::UsersListed { result, .. } => result.is_ok(),
            NetworkResponse::ExerciseCreated { result, .. } => result.is_ok(),
        }
    }
}
