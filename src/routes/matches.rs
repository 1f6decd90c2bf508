use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    ErrorResponse, HealthResponse, InteractionType, InteractionsResponse, RankedBatchRequest,
    RankedBatchResponse, RecordInteractionRequest, RecordInteractionResponse,
};
use crate::services::SessionBatcher;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub batcher: Arc<SessionBatcher>,
    pub max_page_size: u16,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/batch", web::post().to(ranked_batch))
        .route("/matches/interaction", web::post().to(record_interaction))
        .route("/matches/interactions", web::get().to(get_interactions))
        .route("/session/reset", web::post().to(reset_session))
        .route("/demo/reset", web::post().to(reset_demo));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Ranked batch endpoint
///
/// POST /api/v1/matches/batch
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "role": "brand|creator",
///   "campaign": { ... } | null,
///   "cursor": 0,
///   "filters": { ... },
///   "limit": 10,
///   "cycle": false
/// }
/// ```
async fn ranked_batch(
    state: web::Data<AppState>,
    req: web::Json<RankedBatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for ranked batch request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let mut request = req.into_inner();
    request.limit = request.limit.min(state.max_page_size);

    tracing::info!(
        "Ranked batch for user {} (cursor {}, limit {}, cycle {})",
        request.user_id,
        request.cursor,
        request.limit,
        request.cycle
    );

    let result = if request.cycle {
        state.batcher.get_cycling_batch(&request).await
    } else {
        state.batcher.get_ranked_batch(&request).await
    };

    match result {
        Ok(batch) => {
            tracing::debug!(
                "Returning {} candidates for user {} (pool of {})",
                batch.candidates.len(),
                request.user_id,
                batch.total_candidates
            );
            HttpResponse::Ok().json(RankedBatchResponse {
                candidates: batch.candidates,
                next_cursor: batch.next_cursor,
                total_candidates: batch.total_candidates,
            })
        }
        Err(e) => {
            tracing::error!("Failed to build ranked batch for {}: {}", request.user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to build ranked batch".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Record interaction endpoint
///
/// POST /api/v1/matches/interaction
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "targetId": "string",
///   "type": "like|superlike|pass"
/// }
/// ```
async fn record_interaction(
    state: web::Data<AppState>,
    req: web::Json<RecordInteractionRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Unknown types are rejected here; nothing reaches the log for them
    let interaction_type = match req.interaction_type.to_lowercase().as_str() {
        "like" => InteractionType::Like,
        "superlike" => InteractionType::Superlike,
        "pass" => InteractionType::Pass,
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid interaction type".to_string(),
                message: "Interaction type must be one of: like, superlike, pass".to_string(),
                status_code: 400,
            });
        }
    };

    match state
        .batcher
        .record_interaction(&req.user_id, &req.target_id, interaction_type)
    {
        Ok(()) => {
            tracing::debug!("Recorded {} -> {} ({:?})", req.user_id, req.target_id, interaction_type);
            HttpResponse::Ok().json(RecordInteractionResponse {
                success: true,
                event_id: uuid::Uuid::new_v4().to_string(),
            })
        }
        Err(e) => {
            tracing::error!("Failed to record interaction: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to record interaction".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Interaction history for a user
///
/// GET /api/v1/matches/interactions?userId={userId}
async fn get_interactions(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let user_id = match query.get("userId") {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Missing userId parameter".to_string(),
                message: "userId query parameter is required".to_string(),
                status_code: 400,
            });
        }
    };

    match state.batcher.get_interactions(user_id) {
        Ok(interactions) => HttpResponse::Ok().json(InteractionsResponse {
            user_id: user_id.clone(),
            count: interactions.len(),
            interactions,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch interactions for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch interactions".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Clear session exposure state without touching the interaction log
///
/// POST /api/v1/session/reset
async fn reset_session(state: web::Data<AppState>) -> impl Responder {
    match state.batcher.reset_session() {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(e) => {
            tracing::error!("Failed to reset session: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to reset session".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Reinitialize the interaction log to the seed dataset
///
/// POST /api/v1/demo/reset
async fn reset_demo(state: web::Data<AppState>) -> impl Responder {
    match state.batcher.reset_demo() {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(e) => {
            tracing::error!("Failed to reset demo data: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to reset demo data".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
