// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod seed;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use timetable_api::{
    ApiError, BatchProctorOutcome, BatchProctorRequest, ClassExamDetail, ClassTimetableResponse,
    CreateProctorRequest, ExamStatsResponse, ProctorAssignmentView, StudentTimetableResponse,
    TeacherTimetableResponse, UpdateProctorRequest, assemble_student_schedules,
    build_class_exam_detail, build_class_timetable_response, build_proctor_report,
    build_student_timetable_response, build_teacher_timetable_response, class_names,
    compute_exam_stats, ensure_assignment_absent, report_filename, translate_domain_error,
    translate_persistence_error, validate_assignment_request,
};
use timetable_domain::{
    ClassExamInfo, EnglishLesson, ExamSession, HomeroomLesson, Period, ProctorAssignment,
    Student, parse_exam_date, search_names, search_students,
};
use timetable_persistence::{PersistenceError, ProctorAssignmentUpdate, SqlitePersistence};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

/// Timetable Server - HTTP server for the school timetable service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Directory of JSON seed files to load into an empty database.
    #[arg(short, long)]
    seed: Option<String>,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for all timetable and exam records.
    persistence: Arc<Mutex<SqlitePersistence>>,
}

/// Query parameters for search endpoints.
#[derive(Debug, Deserialize)]
struct SearchQuery {
    /// The search text.
    #[serde(default)]
    q: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Service status.
    status: String,
    /// Service name.
    service: String,
    /// Service version.
    version: String,
}

/// Response for listing students.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StudentListApiResponse {
    /// Success indicator.
    success: bool,
    /// The students.
    students: Vec<Student>,
}

/// Response for a student timetable lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StudentTimetableApiResponse {
    /// Success indicator.
    success: bool,
    /// The timetable payload.
    #[serde(flatten)]
    body: StudentTimetableResponse,
}

/// Response for listing or searching teachers.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TeacherListApiResponse {
    /// Success indicator.
    success: bool,
    /// The teacher names.
    teachers: Vec<String>,
}

/// Response for a teacher timetable lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TeacherTimetableApiResponse {
    /// Success indicator.
    success: bool,
    /// The timetable payload.
    #[serde(flatten)]
    body: TeacherTimetableResponse,
}

/// Response for listing classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClassListApiResponse {
    /// Success indicator.
    success: bool,
    /// The class names.
    classes: Vec<String>,
}

/// Response for a class timetable lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClassTimetableApiResponse {
    /// Success indicator.
    success: bool,
    /// The timetable payload.
    #[serde(flatten)]
    body: ClassTimetableResponse,
}

/// Response for listing classrooms.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClassroomListApiResponse {
    /// Success indicator.
    success: bool,
    /// The classroom names.
    classrooms: Vec<String>,
}

/// Response for listing periods.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PeriodListApiResponse {
    /// Success indicator.
    success: bool,
    /// The period records.
    periods: Vec<Period>,
}

/// Response for listing exam sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionListApiResponse {
    /// Success indicator.
    success: bool,
    /// The exam sessions.
    sessions: Vec<ExamSession>,
}

/// Response for one exam session.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionApiResponse {
    /// Success indicator.
    success: bool,
    /// The exam session.
    session: ExamSession,
}

/// Response for listing class exam records.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClassExamListApiResponse {
    /// Success indicator.
    success: bool,
    /// The class exam records with their assignment state.
    classes: Vec<ClassExamDetail>,
}

/// Response for listing proctor assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProctorListApiResponse {
    /// Success indicator.
    success: bool,
    /// The assignments.
    proctors: Vec<ProctorAssignmentView>,
    /// Number of assignments.
    count: usize,
}

/// Response for a single proctor assignment mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProctorApiResponse {
    /// Success indicator.
    success: bool,
    /// A human-readable message.
    message: String,
    /// The assignment after the operation.
    proctor: ProctorAssignmentView,
}

/// Response for a deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeleteApiResponse {
    /// Success indicator.
    success: bool,
    /// A human-readable message.
    message: String,
}

/// Response for a batch assignment request.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BatchProctorApiResponse {
    /// Success indicator.
    success: bool,
    /// A human-readable message.
    message: String,
    /// The batch outcome.
    #[serde(flatten)]
    outcome: BatchProctorOutcome,
}

/// Response for exam statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ExamStatsApiResponse {
    /// Success indicator.
    success: bool,
    /// The statistics payload.
    #[serde(flatten)]
    body: ExamStatsResponse,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Success indicator, always false.
    success: bool,
    /// Error message.
    error: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl HttpError {
    fn not_found(message: String) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            success: false,
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self::from(translate_persistence_error(err))
    }
}

/// Handler for GET /health endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("healthy"),
        service: String::from("timetable-server"),
        version: String::from(env!("CARGO_PKG_VERSION")),
    })
}

/// Handler for GET `/api/students` endpoint.
///
/// Lists all students.
async fn handle_list_students(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<StudentListApiResponse>, HttpError> {
    info!("Handling list_students request");

    let persistence = app_state.persistence.lock().await;
    let students: Vec<Student> = persistence.list_students()?;
    drop(persistence);

    Ok(Json(StudentListApiResponse {
        success: true,
        students,
    }))
}

/// Handler for GET `/api/students/search` endpoint.
///
/// Filters students by a case-insensitive substring of their id or name.
async fn handle_search_students(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<StudentListApiResponse>, HttpError> {
    info!(q = %query.q, "Handling search_students request");

    let persistence = app_state.persistence.lock().await;
    let students: Vec<Student> = persistence.list_students()?;
    drop(persistence);

    let matches: Vec<Student> = search_students(&students, &query.q)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(StudentListApiResponse {
        success: true,
        students: matches,
    }))
}

/// Handler for GET `/api/students/{student_id}` endpoint.
///
/// Returns the student record, the three per-category timetables, the
/// merged view and its statistics.
async fn handle_get_student(
    AxumState(app_state): AxumState<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<StudentTimetableApiResponse>, HttpError> {
    info!(student_id = %student_id, "Handling get_student request");

    let persistence = app_state.persistence.lock().await;
    let Some(student) = persistence.get_student(&student_id)? else {
        drop(persistence);
        return Err(HttpError::not_found(format!(
            "Student '{student_id}' not found"
        )));
    };

    let english: Vec<EnglishLesson> =
        persistence.english_lessons_for_class(&student.english_class_name)?;
    let homeroom: Vec<HomeroomLesson> =
        persistence.homeroom_lessons_for_class(&student.home_room_class_name)?;
    let enrichment: Vec<EnglishLesson> = match &student.ev_myreading_class_name {
        Some(class_name) => persistence.english_lessons_for_class(class_name)?,
        None => Vec::new(),
    };
    drop(persistence);

    let timetables = assemble_student_schedules(&english, &homeroom, &enrichment);
    let body: StudentTimetableResponse = build_student_timetable_response(student, timetables);

    Ok(Json(StudentTimetableApiResponse {
        success: true,
        body,
    }))
}

/// Handler for GET `/api/teachers` endpoint.
async fn handle_list_teachers(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<TeacherListApiResponse>, HttpError> {
    info!("Handling list_teachers request");

    let persistence = app_state.persistence.lock().await;
    let teachers: Vec<String> = persistence.list_teachers()?;
    drop(persistence);

    Ok(Json(TeacherListApiResponse {
        success: true,
        teachers,
    }))
}

/// Handler for GET `/api/teachers/search` endpoint.
async fn handle_search_teachers(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<TeacherListApiResponse>, HttpError> {
    info!(q = %query.q, "Handling search_teachers request");

    let persistence = app_state.persistence.lock().await;
    let teachers: Vec<String> = persistence.list_teachers()?;
    drop(persistence);

    let matches: Vec<String> = search_names(&teachers, &query.q)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(TeacherListApiResponse {
        success: true,
        teachers: matches,
    }))
}

/// Handler for GET `/api/teachers/{teacher_name}/timetable` endpoint.
async fn handle_get_teacher_timetable(
    AxumState(app_state): AxumState<AppState>,
    Path(teacher_name): Path<String>,
) -> Result<Json<TeacherTimetableApiResponse>, HttpError> {
    info!(teacher_name = %teacher_name, "Handling get_teacher_timetable request");

    let persistence = app_state.persistence.lock().await;
    if persistence.find_teacher(&teacher_name)?.is_none() {
        drop(persistence);
        return Err(HttpError::not_found(format!(
            "Teacher '{teacher_name}' not found"
        )));
    }

    let english: Vec<EnglishLesson> = persistence.english_lessons_for_teacher(&teacher_name)?;
    let homeroom: Vec<HomeroomLesson> = persistence.homeroom_lessons_for_teacher(&teacher_name)?;
    drop(persistence);

    let body: TeacherTimetableResponse =
        build_teacher_timetable_response(teacher_name, &english, &homeroom);

    Ok(Json(TeacherTimetableApiResponse {
        success: true,
        body,
    }))
}

/// Handler for GET `/api/classes` endpoint.
async fn handle_list_classes(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ClassListApiResponse>, HttpError> {
    info!("Handling list_classes request");

    let persistence = app_state.persistence.lock().await;
    let classes = persistence.list_classes()?;
    drop(persistence);

    Ok(Json(ClassListApiResponse {
        success: true,
        classes: class_names(&classes),
    }))
}

/// Handler for GET `/api/classes/{class_name}/timetable` endpoint.
async fn handle_get_class_timetable(
    AxumState(app_state): AxumState<AppState>,
    Path(class_name): Path<String>,
) -> Result<Json<ClassTimetableApiResponse>, HttpError> {
    info!(class_name = %class_name, "Handling get_class_timetable request");

    let persistence = app_state.persistence.lock().await;
    let rows = persistence.course_rows_for_class(&class_name)?;
    drop(persistence);

    if rows.is_empty() {
        return Err(HttpError::not_found(format!(
            "No timetable found for class '{class_name}'"
        )));
    }

    let body: ClassTimetableResponse = build_class_timetable_response(class_name, &rows);

    Ok(Json(ClassTimetableApiResponse {
        success: true,
        body,
    }))
}

/// Handler for GET `/api/classrooms` endpoint.
async fn handle_list_classrooms(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ClassroomListApiResponse>, HttpError> {
    info!("Handling list_classrooms request");

    let persistence = app_state.persistence.lock().await;
    let classrooms: Vec<String> = persistence.list_classrooms()?;
    drop(persistence);

    Ok(Json(ClassroomListApiResponse {
        success: true,
        classrooms,
    }))
}

/// Handler for GET `/api/periods` endpoint.
async fn handle_list_periods(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<PeriodListApiResponse>, HttpError> {
    info!("Handling list_periods request");

    let persistence = app_state.persistence.lock().await;
    let periods: Vec<Period> = persistence.list_periods()?;
    drop(persistence);

    Ok(Json(PeriodListApiResponse {
        success: true,
        periods,
    }))
}

/// Handler for GET `/api/exams/sessions` endpoint.
async fn handle_list_exam_sessions(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<SessionListApiResponse>, HttpError> {
    info!("Handling list_exam_sessions request");

    let persistence = app_state.persistence.lock().await;
    let sessions: Vec<ExamSession> = persistence.list_exam_sessions()?;
    drop(persistence);

    Ok(Json(SessionListApiResponse {
        success: true,
        sessions,
    }))
}

/// Handler for GET `/api/exams/sessions/{session_id}` endpoint.
async fn handle_get_exam_session(
    AxumState(app_state): AxumState<AppState>,
    Path(session_id): Path<i64>,
) -> Result<Json<SessionApiResponse>, HttpError> {
    info!(session_id, "Handling get_exam_session request");

    let persistence = app_state.persistence.lock().await;
    let session: Option<ExamSession> = persistence.get_exam_session(session_id)?;
    drop(persistence);

    session.map_or_else(
        || {
            Err(HttpError::not_found(format!(
                "Exam session {session_id} not found"
            )))
        },
        |session| {
            Ok(Json(SessionApiResponse {
                success: true,
                session,
            }))
        },
    )
}

/// Handler for GET `/api/exams/sessions/by-date/{date}` endpoint.
async fn handle_exam_sessions_by_date(
    AxumState(app_state): AxumState<AppState>,
    Path(date): Path<String>,
) -> Result<Json<SessionListApiResponse>, HttpError> {
    info!(date = %date, "Handling exam_sessions_by_date request");

    // Reject malformed dates up front rather than silently matching nothing
    parse_exam_date(&date).map_err(|err| HttpError::from(translate_domain_error(err)))?;

    let persistence = app_state.persistence.lock().await;
    let sessions: Vec<ExamSession> = persistence.exam_sessions_by_date(&date)?;
    drop(persistence);

    Ok(Json(SessionListApiResponse {
        success: true,
        sessions,
    }))
}

/// Joins class exam records with their sessions and assignments.
fn load_class_exam_details(
    persistence: &SqlitePersistence,
    classes: Vec<ClassExamInfo>,
) -> Result<Vec<ClassExamDetail>, HttpError> {
    let mut details: Vec<ClassExamDetail> = Vec::with_capacity(classes.len());
    for info in classes {
        let session: Option<ExamSession> = persistence.get_exam_session(info.exam_session_id)?;
        let assignment: Option<ProctorAssignment> = match info.id {
            Some(id) => persistence.find_assignment_for_class(id)?,
            None => None,
        };
        details.push(build_class_exam_detail(info, session, assignment.as_ref()));
    }
    Ok(details)
}

/// Handler for GET `/api/exams/classes` endpoint.
async fn handle_list_exam_classes(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ClassExamListApiResponse>, HttpError> {
    info!("Handling list_exam_classes request");

    let persistence = app_state.persistence.lock().await;
    let classes: Vec<ClassExamInfo> = persistence.list_class_exam_info()?;
    let details: Vec<ClassExamDetail> = load_class_exam_details(&persistence, classes)?;
    drop(persistence);

    Ok(Json(ClassExamListApiResponse {
        success: true,
        classes: details,
    }))
}

/// Handler for GET `/api/exams/classes/grade-band/{grade_band}` endpoint.
async fn handle_exam_classes_by_grade_band(
    AxumState(app_state): AxumState<AppState>,
    Path(grade_band): Path<String>,
) -> Result<Json<ClassExamListApiResponse>, HttpError> {
    info!(grade_band = %grade_band, "Handling exam_classes_by_grade_band request");

    let persistence = app_state.persistence.lock().await;
    let Some(session) = persistence.find_exam_session_by_grade_band(&grade_band)? else {
        drop(persistence);
        return Err(HttpError::not_found(format!(
            "Grade band '{grade_band}' not found"
        )));
    };
    let Some(session_id) = session.id else {
        drop(persistence);
        return Err(HttpError::not_found(format!(
            "Grade band '{grade_band}' not found"
        )));
    };

    let classes: Vec<ClassExamInfo> = persistence.class_exam_info_for_session(session_id)?;
    let details: Vec<ClassExamDetail> = load_class_exam_details(&persistence, classes)?;
    drop(persistence);

    Ok(Json(ClassExamListApiResponse {
        success: true,
        classes: details,
    }))
}

/// Resolves the class name of an assignment for display.
fn assignment_view(
    persistence: &SqlitePersistence,
    assignment: ProctorAssignment,
) -> Result<ProctorAssignmentView, HttpError> {
    let class_name: Option<String> = persistence
        .get_class_exam_info(assignment.class_exam_info_id)?
        .map(|info| info.class_name);
    Ok(ProctorAssignmentView {
        assignment,
        class_name,
    })
}

/// Handler for GET `/api/exams/proctors` endpoint.
async fn handle_list_proctors(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ProctorListApiResponse>, HttpError> {
    info!("Handling list_proctors request");

    let persistence = app_state.persistence.lock().await;
    let assignments: Vec<ProctorAssignment> = persistence.list_proctor_assignments()?;
    let mut proctors: Vec<ProctorAssignmentView> = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        proctors.push(assignment_view(&persistence, assignment)?);
    }
    drop(persistence);

    let count: usize = proctors.len();
    Ok(Json(ProctorListApiResponse {
        success: true,
        proctors,
        count,
    }))
}

/// Handler for POST `/api/exams/proctors` endpoint.
///
/// Creates a proctor assignment for a class that does not yet have one.
async fn handle_create_proctor(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateProctorRequest>,
) -> Result<(StatusCode, Json<ProctorApiResponse>), HttpError> {
    info!(
        class_exam_info_id = req.class_exam_info_id,
        proctor_teacher = %req.proctor_teacher,
        "Handling create_proctor request"
    );

    validate_assignment_request(&req.proctor_teacher, &req.classroom)?;

    let persistence = app_state.persistence.lock().await;
    if persistence
        .get_class_exam_info(req.class_exam_info_id)?
        .is_none()
    {
        drop(persistence);
        return Err(HttpError::not_found(format!(
            "Class exam info {} not found",
            req.class_exam_info_id
        )));
    }

    let existing: Option<ProctorAssignment> =
        persistence.find_assignment_for_class(req.class_exam_info_id)?;
    ensure_assignment_absent(existing.as_ref(), req.class_exam_info_id)?;

    let assignment_id: i64 = persistence.create_proctor_assignment(
        req.class_exam_info_id,
        &req.proctor_teacher,
        &req.classroom,
        req.notes.as_deref(),
    )?;
    let Some(assignment) = persistence.get_proctor_assignment(assignment_id)? else {
        drop(persistence);
        return Err(HttpError::from(PersistenceError::NotFound(format!(
            "proctor assignment {assignment_id}"
        ))));
    };
    let proctor: ProctorAssignmentView = assignment_view(&persistence, assignment)?;
    drop(persistence);

    info!(assignment_id, "Successfully created proctor assignment");

    Ok((
        StatusCode::CREATED,
        Json(ProctorApiResponse {
            success: true,
            message: String::from("Proctor assignment created successfully"),
            proctor,
        }),
    ))
}

/// Handler for PUT `/api/exams/proctors/{proctor_id}` endpoint.
async fn handle_update_proctor(
    AxumState(app_state): AxumState<AppState>,
    Path(proctor_id): Path<i64>,
    Json(req): Json<UpdateProctorRequest>,
) -> Result<Json<ProctorApiResponse>, HttpError> {
    info!(proctor_id, "Handling update_proctor request");

    let persistence = app_state.persistence.lock().await;
    let update: ProctorAssignmentUpdate = ProctorAssignmentUpdate {
        proctor_teacher: req.proctor_teacher,
        classroom: req.classroom,
        notes: req.notes,
    };
    persistence.update_proctor_assignment(proctor_id, &update)?;

    let Some(assignment) = persistence.get_proctor_assignment(proctor_id)? else {
        drop(persistence);
        return Err(HttpError::not_found(format!(
            "Proctor assignment {proctor_id} not found"
        )));
    };
    let proctor: ProctorAssignmentView = assignment_view(&persistence, assignment)?;
    drop(persistence);

    info!(proctor_id, "Successfully updated proctor assignment");

    Ok(Json(ProctorApiResponse {
        success: true,
        message: String::from("Proctor assignment updated successfully"),
        proctor,
    }))
}

/// Handler for DELETE `/api/exams/proctors/{proctor_id}` endpoint.
async fn handle_delete_proctor(
    AxumState(app_state): AxumState<AppState>,
    Path(proctor_id): Path<i64>,
) -> Result<Json<DeleteApiResponse>, HttpError> {
    info!(proctor_id, "Handling delete_proctor request");

    let persistence = app_state.persistence.lock().await;
    persistence.delete_proctor_assignment(proctor_id)?;
    drop(persistence);

    info!(proctor_id, "Successfully deleted proctor assignment");

    Ok(Json(DeleteApiResponse {
        success: true,
        message: String::from("Proctor assignment deleted successfully"),
    }))
}

/// Handler for POST `/api/exams/proctors/batch` endpoint.
///
/// Applies create-or-update per item; item failures are collected into the
/// outcome instead of aborting the batch.
async fn handle_batch_proctors(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<BatchProctorRequest>,
) -> Result<Json<BatchProctorApiResponse>, HttpError> {
    info!(
        items = req.assignments.len(),
        "Handling batch_proctors request"
    );

    let persistence = app_state.persistence.lock().await;
    let mut outcome: BatchProctorOutcome = BatchProctorOutcome::default();

    for item in req.assignments {
        let Some(class_exam_info_id) = item.class_exam_info_id else {
            outcome
                .errors
                .push(String::from("Missing class_exam_info_id"));
            continue;
        };

        let existing: Option<ProctorAssignment> =
            match persistence.find_assignment_for_class(class_exam_info_id) {
                Ok(existing) => existing,
                Err(err) => {
                    outcome.errors.push(err.to_string());
                    continue;
                }
            };

        let result: Result<(), PersistenceError> = match existing.and_then(|a| a.id) {
            Some(assignment_id) => persistence
                .update_proctor_assignment(
                    assignment_id,
                    &ProctorAssignmentUpdate {
                        proctor_teacher: item.proctor_teacher,
                        classroom: item.classroom,
                        notes: item.notes,
                    },
                )
                .map(|()| outcome.updated += 1),
            None => persistence
                .create_proctor_assignment(
                    class_exam_info_id,
                    item.proctor_teacher.as_deref().unwrap_or_default(),
                    item.classroom.as_deref().unwrap_or_default(),
                    item.notes.as_deref(),
                )
                .map(|_| outcome.created += 1),
        };

        if let Err(err) = result {
            outcome.errors.push(err.to_string());
        }
    }
    drop(persistence);

    info!(
        created = outcome.created,
        updated = outcome.updated,
        errors = outcome.errors.len(),
        "Batch proctor request complete"
    );

    Ok(Json(BatchProctorApiResponse {
        success: true,
        message: String::from("Batch processing complete"),
        outcome,
    }))
}

/// Builds the joined records the CSV report is generated from.
fn load_report_records(
    persistence: &SqlitePersistence,
    classes: Vec<ClassExamInfo>,
) -> Result<Vec<(ClassExamInfo, ExamSession, Option<ProctorAssignment>)>, HttpError> {
    let mut records: Vec<(ClassExamInfo, ExamSession, Option<ProctorAssignment>)> =
        Vec::with_capacity(classes.len());
    for info in classes {
        let Some(session) = persistence.get_exam_session(info.exam_session_id)? else {
            // Orphaned class rows are skipped rather than failing the export
            continue;
        };
        let assignment: Option<ProctorAssignment> = match info.id {
            Some(id) => persistence.find_assignment_for_class(id)?,
            None => None,
        };
        records.push((info, session, assignment));
    }
    Ok(records)
}

/// Builds a CSV attachment response.
fn csv_response(filename: &str, report: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, String::from("text/csv")),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        report,
    )
        .into_response()
}

/// Handler for GET `/api/exams/export/csv` endpoint.
///
/// Exports all class exam records as the 15-column proctor report.
async fn handle_export_csv(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Response, HttpError> {
    info!("Handling export_csv request");

    let persistence = app_state.persistence.lock().await;
    let classes: Vec<ClassExamInfo> = persistence.list_class_exam_info()?;
    let records = load_report_records(&persistence, classes)?;
    drop(persistence);

    let report: String = build_proctor_report(&records)?;
    Ok(csv_response(&report_filename(None), report))
}

/// Handler for GET `/api/exams/export/csv/{grade_band}` endpoint.
async fn handle_export_csv_grade_band(
    AxumState(app_state): AxumState<AppState>,
    Path(grade_band): Path<String>,
) -> Result<Response, HttpError> {
    info!(grade_band = %grade_band, "Handling export_csv_grade_band request");

    let persistence = app_state.persistence.lock().await;
    let Some(session) = persistence.find_exam_session_by_grade_band(&grade_band)? else {
        drop(persistence);
        return Err(HttpError::not_found(format!(
            "Grade band '{grade_band}' not found"
        )));
    };
    let Some(session_id) = session.id else {
        drop(persistence);
        return Err(HttpError::not_found(format!(
            "Grade band '{grade_band}' not found"
        )));
    };
    let classes: Vec<ClassExamInfo> = persistence.class_exam_info_for_session(session_id)?;
    let records = load_report_records(&persistence, classes)?;
    drop(persistence);

    let report: String = build_proctor_report(&records)?;
    Ok(csv_response(&report_filename(Some(&grade_band)), report))
}

/// Handler for GET `/api/exams/stats` endpoint.
async fn handle_exam_stats(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ExamStatsApiResponse>, HttpError> {
    info!("Handling exam_stats request");

    let persistence = app_state.persistence.lock().await;
    let classes: Vec<ClassExamInfo> = persistence.list_class_exam_info()?;
    let assignments: Vec<ProctorAssignment> = persistence.list_proctor_assignments()?;
    let sessions: Vec<ExamSession> = persistence.list_exam_sessions()?;
    drop(persistence);

    let body: ExamStatsResponse = compute_exam_stats(&classes, &assignments, &sessions);

    Ok(Json(ExamStatsApiResponse {
        success: true,
        body,
    }))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    // The SPA frontend is served from a different origin
    let cors: CorsLayer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api: Router<AppState> = Router::new()
        .route("/students", get(handle_list_students))
        .route("/students/search", get(handle_search_students))
        .route("/students/{student_id}", get(handle_get_student))
        .route("/teachers", get(handle_list_teachers))
        .route("/teachers/search", get(handle_search_teachers))
        .route(
            "/teachers/{teacher_name}/timetable",
            get(handle_get_teacher_timetable),
        )
        .route("/classes", get(handle_list_classes))
        .route(
            "/classes/{class_name}/timetable",
            get(handle_get_class_timetable),
        )
        .route("/classrooms", get(handle_list_classrooms))
        .route("/periods", get(handle_list_periods))
        .route("/exams/sessions", get(handle_list_exam_sessions))
        .route("/exams/sessions/{session_id}", get(handle_get_exam_session))
        .route(
            "/exams/sessions/by-date/{date}",
            get(handle_exam_sessions_by_date),
        )
        .route("/exams/classes", get(handle_list_exam_classes))
        .route(
            "/exams/classes/grade-band/{grade_band}",
            get(handle_exam_classes_by_grade_band),
        )
        .route("/exams/proctors", get(handle_list_proctors))
        .route("/exams/proctors", post(handle_create_proctor))
        .route("/exams/proctors/{proctor_id}", put(handle_update_proctor))
        .route(
            "/exams/proctors/{proctor_id}",
            delete(handle_delete_proctor),
        )
        .route("/exams/proctors/batch", post(handle_batch_proctors))
        .route("/exams/export/csv", get(handle_export_csv))
        .route(
            "/exams/export/csv/{grade_band}",
            get(handle_export_csv_grade_band),
        )
        .route("/exams/stats", get(handle_exam_stats));

    Router::new()
        .route("/health", get(handle_health))
        .nest("/api", api)
        .layer(cors)
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Timetable Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    // Load seed data when requested and the database is empty
    if let Some(seed_dir) = &args.seed {
        seed::load_seed_data(&persistence, seed_dir)?;
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
