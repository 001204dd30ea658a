//! HTTP handlers for tutor endpoints.
//!
//! Sessions live in an in-process map keyed by id. Each context sits behind
//! its own async mutex, so turns within one session are applied strictly in
//! arrival order while distinct sessions proceed concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::application::handlers::{
    DispatchCommand, DispatchHandler, ListModulesForRoleHandler, OnboardCommand, OnboardError,
    OnboardHandler, SelectModuleCommand, SelectModuleError, SelectModuleHandler,
};
use crate::domain::session::SessionContext;

use super::dto::{
    CreateSessionRequest, ErrorResponse, MessageRequest, MessageResponse,
    ModuleAssignmentResponse, ProfileResponse, ProgressResponse, SelectModuleRequest,
    SessionCreatedResponse,
};

type SessionMap = HashMap<Uuid, Arc<Mutex<SessionContext>>>;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TutorHandlers {
    onboard_handler: Arc<OnboardHandler>,
    select_handler: Arc<SelectModuleHandler>,
    list_handler: Arc<ListModulesForRoleHandler>,
    dispatch_handler: Arc<DispatchHandler>,
    sessions: Arc<RwLock<SessionMap>>,
}

impl TutorHandlers {
    pub fn new(
        onboard_handler: Arc<OnboardHandler>,
        select_handler: Arc<SelectModuleHandler>,
        list_handler: Arc<ListModulesForRoleHandler>,
        dispatch_handler: Arc<DispatchHandler>,
    ) -> Self {
        Self {
            onboard_handler,
            select_handler,
            list_handler,
            dispatch_handler,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn session(&self, id: Uuid) -> Option<Arc<Mutex<SessionContext>>> {
        self.sessions.read().await.get(&id).cloned()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Onboard a learner and create a session.
pub async fn create_session(
    State(handlers): State<TutorHandlers>,
    Json(req): Json<CreateSessionRequest>,
) -> Response {
    let cmd = OnboardCommand {
        name: req.name,
        role: req.role,
        custom_role: req.custom_role,
    };

    match handlers.onboard_handler.handle(cmd) {
        Ok(result) => {
            let profile = result
                .context
                .profile
                .as_ref()
                .map(ProfileResponse::from);
            let Some(profile) = profile else {
                // Onboarding always attaches a profile; treat absence as a bug.
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::bad_request("session created without profile")),
                )
                    .into_response();
            };
            let training_plan: Vec<ModuleAssignmentResponse> = result
                .context
                .profile
                .as_ref()
                .map(|p| handlers.list_handler.handle(p))
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect();

            let session_id = Uuid::new_v4();
            handlers
                .sessions
                .write()
                .await
                .insert(session_id, Arc::new(Mutex::new(result.context)));

            let response = SessionCreatedResponse {
                session_id,
                welcome: result.welcome,
                profile,
                training_plan,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_onboard_error(e),
    }
}

/// POST /api/sessions/:id/messages - Dispatch one conversational turn.
pub async fn post_message(
    State(handlers): State<TutorHandlers>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<MessageRequest>,
) -> Response {
    let Some(session) = handlers.session(session_id).await else {
        return session_not_found(session_id);
    };

    // Hold the session lock across the whole turn; interleaved turns on the
    // same session would corrupt the step cursor.
    let mut context = session.lock().await;
    let result = handlers
        .dispatch_handler
        .handle(DispatchCommand {
            text: req.text,
            context: context.clone(),
        })
        .await;
    *context = result.context;

    let response = MessageResponse::from_context(result.response, &context);
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/sessions/:id/module - Enter a training module.
pub async fn select_module(
    State(handlers): State<TutorHandlers>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<SelectModuleRequest>,
) -> Response {
    let Some(session) = handlers.session(session_id).await else {
        return session_not_found(session_id);
    };

    let mut context = session.lock().await;
    match handlers.select_handler.handle(SelectModuleCommand {
        module: req.module,
        context: context.clone(),
    }) {
        Ok(result) => {
            *context = result.context;
            let response = MessageResponse::from_context(result.response, &context);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(SelectModuleError::UnknownModule(module)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::unknown_module(&module)),
        )
            .into_response(),
    }
}

/// GET /api/sessions/:id/modules - The session's personalized training plan.
pub async fn get_modules(
    State(handlers): State<TutorHandlers>,
    Path(session_id): Path<Uuid>,
) -> Response {
    let Some(session) = handlers.session(session_id).await else {
        return session_not_found(session_id);
    };

    let context = session.lock().await;
    let plan: Vec<ModuleAssignmentResponse> = context
        .profile
        .as_ref()
        .map(|p| handlers.list_handler.handle(p))
        .unwrap_or_default()
        .into_iter()
        .map(Into::into)
        .collect();

    (StatusCode::OK, Json(plan)).into_response()
}

/// GET /api/sessions/:id/progress - Mandatory-module completion report.
pub async fn get_progress(
    State(handlers): State<TutorHandlers>,
    Path(session_id): Path<Uuid>,
) -> Response {
    let Some(session) = handlers.session(session_id).await else {
        return session_not_found(session_id);
    };

    let context = session.lock().await;
    let progress = context.progress();
    let response = ProgressResponse {
        completed_mandatory: progress.map(|p| p.completed_mandatory).unwrap_or(0),
        total_mandatory: progress.map(|p| p.total_mandatory).unwrap_or(0),
        fraction: progress.map(|p| p.fraction()).unwrap_or(0.0),
        completed_modules: context
            .completed_modules
            .iter()
            .map(|id| id.as_str().to_string())
            .collect(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

fn session_not_found(id: Uuid) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found("Session", &id.to_string())),
    )
        .into_response()
}

fn handle_onboard_error(error: OnboardError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(error.to_string())),
    )
        .into_response()
}
