use axum::extract::State;
use axum::response::{IntoResponse, Json};
use rubik::{scramble, CubeState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /health
pub async fn health() -> impl IntoResponse {
    "Rubik solver is running"
}

#[derive(Debug, Serialize)]
pub struct ScrambleResponse {
    pub sequence: String,
    pub faces: BTreeMap<String, String>,
    pub cube_state: CubeState,
}

/// GET /api/scramble - random scramble of the configured length
pub async fn scramble(State(state): State<AppState>) -> Json<ScrambleResponse> {
    let scramble = scramble::generate(state.config().scramble_length);
    let report = scramble.report();
    tracing::debug!(sequence = %report.sequence, "scramble");

    Json(ScrambleResponse {
        sequence: report.sequence,
        faces: report.faces,
        cube_state: CubeState::from(scramble.cube()),
    })
}

#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    pub cube_state: CubeState,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SolveResponse {
    pub solution: String,
}

/// POST /api/solve - solve a submitted cube state
///
/// The external solver is a blocking process call, so it runs off the async
/// workers.
pub async fn solve(
    State(state): State<AppState>,
    Json(request): Json<SolveRequest>,
) -> Result<Json<SolveResponse>, ApiError> {
    let solver = state.solver().clone();
    let cube_state = request.cube_state;
    let solution = tokio::task::spawn_blocking(move || solver.solve_state(&cube_state))
        .await
        .map_err(|e| ApiError::Internal(format!("solve task failed: {e}")))??;

    tracing::info!(solution = %solution, "solved");
    Ok(Json(SolveResponse {
        solution: solution.into_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::http::StatusCode;
    use rubik::{moves, AlgorithmError, FaceletString, Facelets, SolveAlgorithm};
    use std::sync::Arc;

    struct Fixed(Result<&'static str, AlgorithmError>);

    impl SolveAlgorithm for Fixed {
        fn solve(&self, _: &FaceletString) -> Result<String, AlgorithmError> {
            self.0.clone().map(str::to_string)
        }
    }

    fn state(answer: Result<&'static str, AlgorithmError>) -> AppState {
        AppState::with_algorithm(ServerConfig::default(), Arc::new(Fixed(answer)))
    }

    fn request(cube: &Facelets) -> Json<SolveRequest> {
        Json(SolveRequest {
            cube_state: CubeState::from(cube),
        })
    }

    #[tokio::test]
    async fn test_solve_returns_sequence() {
        let mut cube = Facelets::solved();
        moves::front(&mut cube);

        let Json(response) = solve(State(state(Ok("F'"))), request(&cube))
            .await
            .unwrap();
        assert_eq!(
            response,
            SolveResponse {
                solution: "F'".into()
            }
        );
    }

    #[tokio::test]
    async fn test_invalid_cube_is_bad_request() {
        let mut cube = Facelets::solved();
        cube.set_sticker(rubik::Face::Down, 1, 0, rubik::Color::White);

        let err = solve(State(state(Ok(""))), request(&cube))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(matches!(
            err,
            ApiError::Cube(rubik::Error::Solve(rubik::SolveError::Invalid(_)))
        ));
    }

    #[tokio::test]
    async fn test_malformed_state_is_bad_request() {
        let mut cube_state = CubeState::from(&Facelets::solved());
        cube_state.0.remove("L");

        let err = solve(State(state(Ok(""))), Json(SolveRequest { cube_state }))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.message().contains("L"));
    }

    #[tokio::test]
    async fn test_face_given_twice_is_bad_request() {
        let mut cube_state = CubeState::from(&Facelets::solved());
        cube_state.0.insert("f".into(), vec![vec!['B'; 3]; 3]);

        let err = solve(State(state(Ok(""))), Json(SolveRequest { cube_state }))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err,
            ApiError::Cube(rubik::StateError::DuplicateFace(rubik::Face::Front).into())
        );
    }

    #[tokio::test]
    async fn test_unsolvable_and_unavailable() {
        let rejected = state(Err(AlgorithmError::Rejected("Error 8".into())));
        let err = solve(State(rejected), request(&Facelets::solved()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let missing = state(Err(AlgorithmError::Unavailable("no kociemba".into())));
        let err = solve(State(missing), request(&Facelets::solved()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_scramble_is_consistent() {
        let Json(response) = scramble(State(state(Ok("")))).await;
        assert_eq!(response.sequence.split(' ').count(), 25);
        assert_eq!(response.faces.len(), 6);

        let cube = response.cube_state.to_facelets().unwrap();
        assert!(rubik::validate::validate(&cube));
        assert_eq!(response.faces["F"], cube.face_string(rubik::Face::Front));

        let mut replay = Facelets::solved();
        replay.apply_notation(&response.sequence).unwrap();
        assert_eq!(replay, cube);
    }
}
