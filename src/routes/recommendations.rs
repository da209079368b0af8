use crate::core::Recommender;
use crate::models::{
    ErrorResponse, HealthResponse, RankRequest, RankResponse, ScoreRequest, ScoreResponse,
};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations/score", web::post().to(score_destination))
        .route("/recommendations/rank", web::post().to(rank_destinations))
        .route("/debug/echo", web::post().to(debug_echo));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Debug endpoint to echo raw JSON for debugging
async fn debug_echo(body: web::Bytes, req: actix_web::HttpRequest) -> impl Responder {
    let body_str = String::from_utf8_lossy(&body);
    tracing::info!(
        "DEBUG echo - path: {}, method: {}, body: {}",
        req.path(),
        req.method(),
        body_str
    );
    HttpResponse::Ok().json(serde_json::json!({
        "path": req.path(),
        "method": req.method().to_string(),
        "body": body_str,
    }))
}

/// Score a single destination against the user's preferences
///
/// POST /api/v1/recommendations/score
///
/// Request body:
/// ```json
/// {
///   "preferences": { "budget": "2000-3000", "climatePreference": "Mediterranean", ... },
///   "destination": { "name": "string", "costOfLiving": 2, ... }
/// }
/// ```
async fn score_destination(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    let ScoreRequest {
        preferences,
        destination,
    } = req.into_inner();

    match state.recommender.score(&preferences, &destination) {
        Ok((score, breakdown)) => {
            tracing::info!(
                "Scored destination {} at {:.1}",
                destination.name,
                score
            );
            HttpResponse::Ok().json(ScoreResponse {
                destination: destination.name,
                match_score: score,
                breakdown,
            })
        }
        Err(e) => {
            tracing::info!("Rejected scoring request for {}: {}", destination.name, e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
    }
}

/// Rank a list of candidate destinations for the user
///
/// POST /api/v1/recommendations/rank
///
/// Request body:
/// ```json
/// {
///   "preferences": { ... },
///   "destinations": [ { ... }, { ... } ]
/// }
/// ```
async fn rank_destinations(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    // Validate request shape before touching the engine
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let RankRequest {
        preferences,
        destinations,
    } = req.into_inner();

    tracing::info!("Ranking {} destinations", destinations.len());

    match state.recommender.rank(&preferences, destinations) {
        Ok(result) => {
            tracing::info!(
                "Returning {} ranked destinations (from {} candidates)",
                result.matches.len(),
                result.total_candidates
            );
            HttpResponse::Ok().json(RankResponse {
                matches: result.matches,
                total_candidates: result.total_candidates,
            })
        }
        Err(e) => {
            tracing::info!("Rejected rank request: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
    }
}
