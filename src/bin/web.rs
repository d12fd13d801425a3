//! Single binary web server for tournament mode. All state lives in memory.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use scoreboard_tournament::{
    all_standings, apply_manual_draw, apply_random_draw, begin_draw, group_standings,
    record_match_result, start_knockout, start_match, ErrorKind, GroupAssignment, GroupId,
    MatchId, ParticipantId, Tournament, TournamentConfig, TournamentError, TournamentId,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    #[serde(default = "default_tournament_name")]
    name: String,
    #[serde(default)]
    config: TournamentConfig,
}

fn default_tournament_name() -> String {
    "Tournament".to_string()
}

#[derive(Deserialize)]
struct AddParticipantBody {
    name: String,
}

#[derive(Deserialize)]
struct ManualDrawBody {
    assignments: GroupAssignment,
}

#[derive(Deserialize)]
struct MatchResultBody {
    player1_score: u32,
    player2_score: u32,
}

#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

#[derive(Deserialize)]
struct TournamentParticipantPath {
    id: TournamentId,
    participant_id: ParticipantId,
}

#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

#[derive(Deserialize)]
struct TournamentGroupPath {
    id: TournamentId,
    group_id: GroupId,
}

fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e.kind() {
        ErrorKind::Validation => HttpResponse::BadRequest().json(body),
        ErrorKind::InvalidState => HttpResponse::Conflict().json(body),
        ErrorKind::NotFound => HttpResponse::NotFound().json(body),
    }
}

/// Look up a tournament, refresh its activity time and run `f` on it.
/// `f` returns the response for the success case.
fn with_tournament<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> Result<HttpResponse, TournamentError>,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match f(&mut entry.tournament) {
        Ok(resp) => resp,
        Err(e) => {
            log::debug!("Tournament {} request rejected: {}", id, e);
            error_response(&e)
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "scoreboard-tournament",
    })
}

/// Create a new tournament (returns it with id).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Option<Json<CreateTournamentBody>>) -> HttpResponse {
    let (name, config) = match body {
        Some(b) => {
            let b = b.into_inner();
            (b.name, b.config)
        }
        None => (default_tournament_name(), TournamentConfig::default()),
    };
    let tournament = Tournament::new(name, config);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let resp = HttpResponse::Ok().json(&tournament);
    log::info!("Created tournament {}", tournament.id);
    g.insert(
        tournament.id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    resp
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| Ok(HttpResponse::Ok().json(&*t)))
}

/// Back to Setup, keeping participants and config.
#[post("/api/tournaments/{id}/reset")]
async fn api_reset_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        t.reset();
        Ok(HttpResponse::Ok().json(&*t))
    })
}

#[post("/api/tournaments/{id}/participants")]
async fn api_add_participant(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<AddParticipantBody>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        t.add_participant(body.name.as_str())?;
        Ok(HttpResponse::Ok().json(&*t))
    })
}

/// Import participants from a CSV body with a `name` column.
#[post("/api/tournaments/{id}/participants/import")]
async fn api_import_participants(state: AppState, path: Path<TournamentPath>, body: String) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        let added = t.import_roster(body.as_bytes())?;
        log::info!("Imported {} participant(s) into tournament {}", added, t.id);
        Ok(HttpResponse::Ok().json(&*t))
    })
}

#[delete("/api/tournaments/{id}/participants/{participant_id}")]
async fn api_remove_participant(state: AppState, path: Path<TournamentParticipantPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        t.remove_participant(path.participant_id)?;
        Ok(HttpResponse::Ok().json(&*t))
    })
}

#[put("/api/tournaments/{id}/config")]
async fn api_set_config(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<TournamentConfig>,
) -> HttpResponse {
    let config = body.into_inner();
    with_tournament(&state, path.id, move |t| {
        t.set_config(config)?;
        Ok(HttpResponse::Ok().json(&*t))
    })
}

/// Setup -> GroupDraw.
#[post("/api/tournaments/{id}/draw/start")]
async fn api_begin_draw(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        begin_draw(t)?;
        Ok(HttpResponse::Ok().json(&*t))
    })
}

#[post("/api/tournaments/{id}/draw/random")]
async fn api_random_draw(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        apply_random_draw(t, &mut rand::thread_rng())?;
        Ok(HttpResponse::Ok().json(&*t))
    })
}

#[post("/api/tournaments/{id}/draw/manual")]
async fn api_manual_draw(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<ManualDrawBody>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        apply_manual_draw(t, &body.assignments)?;
        Ok(HttpResponse::Ok().json(&*t))
    })
}

#[put("/api/tournaments/{id}/matches/{match_id}/start")]
async fn api_start_match(state: AppState, path: Path<TournamentMatchPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        start_match(t, path.match_id)?;
        Ok(HttpResponse::Ok().json(&*t))
    })
}

/// Record a score. The second semifinal result creates the final; the final result completes the tournament.
#[put("/api/tournaments/{id}/matches/{match_id}/result")]
async fn api_record_result(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<MatchResultBody>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        record_match_result(t, path.match_id, body.player1_score, body.player2_score)?;
        Ok(HttpResponse::Ok().json(&*t))
    })
}

#[get("/api/tournaments/{id}/groups/{group_id}/standings")]
async fn api_group_standings(state: AppState, path: Path<TournamentGroupPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        let standings = group_standings(t, path.group_id)?;
        Ok(HttpResponse::Ok().json(standings))
    })
}

#[get("/api/tournaments/{id}/standings")]
async fn api_all_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        let body: Vec<_> = all_standings(t)
            .into_iter()
            .map(|(group_id, standings)| serde_json::json!({ "group_id": group_id, "standings": standings }))
            .collect();
        Ok(HttpResponse::Ok().json(body))
    })
}

/// GroupStage -> Knockout (creates both semifinals).
#[post("/api/tournaments/{id}/knockout")]
async fn api_start_knockout(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        start_knockout(t)?;
        Ok(HttpResponse::Ok().json(&*t))
    })
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Every 30 minutes, remove tournaments inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_reset_tournament)
            .service(api_add_participant)
            .service(api_import_participants)
            .service(api_remove_participant)
            .service(api_set_config)
            .service(api_begin_draw)
            .service(api_random_draw)
            .service(api_manual_draw)
            .service(api_start_match)
            .service(api_record_result)
            .service(api_group_standings)
            .service(api_all_standings)
            .service(api_start_knockout)
    })
    .bind(bind)?
    .run()
    .await
}
