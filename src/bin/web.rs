//! Single binary web server: REST API for championships, players, and matches.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use score_tracker_web::{ChampionshipId, MatchId, PlayerId, Store, TrackerError};
use serde::Deserialize;
use std::sync::RwLock;

/// Shared state: one store behind a lock; each handler takes one guard.
type AppState = Data<RwLock<Store>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateChampionshipBody {
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
struct UpdateChampionshipBody {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct CreatePlayerBody {
    name: String,
    #[serde(default)]
    championship_ids: Vec<ChampionshipId>,
}

#[derive(Deserialize)]
struct UpdatePlayerBody {
    name: Option<String>,
    championship_ids: Option<Vec<ChampionshipId>>,
}

#[derive(Deserialize)]
struct CreateMatchBody {
    championship_id: ChampionshipId,
    player1: String,
    player2: String,
    game: Option<String>,
}

#[derive(Deserialize)]
struct ScoreBody {
    player1_score: i32,
    player2_score: i32,
}

/// Query string: optional championship filter (e.g. /api/matches?championship_id=3)
#[derive(Deserialize)]
struct ChampionshipFilter {
    championship_id: Option<ChampionshipId>,
}

/// Path segment: championship id (e.g. /api/championships/{id})
#[derive(Deserialize)]
struct ChampionshipPath {
    id: ChampionshipId,
}

/// Path segment: player id
#[derive(Deserialize)]
struct PlayerPath {
    id: PlayerId,
}

/// Path segment: match id
#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

/// Map a store error to its HTTP response. Missing entities are 404; a
/// corrupt winner record is an internal error; everything else is a rejected
/// precondition.
fn error_response(e: &TrackerError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TrackerError::ChampionshipNotFound(_)
        | TrackerError::PlayerNotFound(_)
        | TrackerError::MatchNotFound(_) => HttpResponse::NotFound().json(body),
        TrackerError::InvalidWinner { .. } => HttpResponse::InternalServerError().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "score-tracker-web",
    })
}

// ---- championships ----

#[get("/api/championships")]
async fn api_list_championships(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.list_championships())
}

#[post("/api/championships")]
async fn api_create_championship(state: AppState, body: Json<CreateChampionshipBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.create_championship(&body.name, &body.description) {
        Ok(c) => HttpResponse::Created().json(c),
        Err(e) => error_response(&e),
    }
}

/// Get one championship with its players and matches embedded.
#[get("/api/championships/{id}")]
async fn api_get_championship(state: AppState, path: Path<ChampionshipPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_championship(path.id) {
        Ok(c) => HttpResponse::Ok().json(c),
        Err(e) => error_response(&e),
    }
}

/// Update name/description. Status never changes here: finalize is one-way
/// and has its own endpoint.
#[put("/api/championships/{id}")]
async fn api_update_championship(
    state: AppState,
    path: Path<ChampionshipPath>,
    body: Json<UpdateChampionshipBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.update_championship(path.id, body.name.as_deref(), body.description.as_deref()) {
        Ok(c) => HttpResponse::Ok().json(c),
        Err(e) => error_response(&e),
    }
}

#[delete("/api/championships/{id}")]
async fn api_delete_championship(state: AppState, path: Path<ChampionshipPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.delete_championship(path.id) {
        Ok(()) => HttpResponse::Ok()
            .json(serde_json::json!({ "message": "Championship deleted successfully" })),
        Err(e) => error_response(&e),
    }
}

/// Finalize a championship (locks the roster; requires at least 2 players).
#[post("/api/championships/{id}/finalize")]
async fn api_finalize_championship(state: AppState, path: Path<ChampionshipPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.finalize_championship(path.id) {
        Ok(c) => {
            log::info!("Championship {} finalized", c.id);
            HttpResponse::Ok().json(c)
        }
        Err(e) => error_response(&e),
    }
}

/// Current standings: points per player, descending, roster order on ties.
#[get("/api/championships/{id}/standings")]
async fn api_standings(state: AppState, path: Path<ChampionshipPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.standings(path.id) {
        Ok(standings) => HttpResponse::Ok().json(standings),
        Err(e) => error_response(&e),
    }
}

/// Generate the full round robin for a finalized championship, once.
#[post("/api/championships/{id}/generate-matches")]
async fn api_generate_matches(state: AppState, path: Path<ChampionshipPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.generate_matches(path.id) {
        Ok(matches) => {
            log::info!(
                "Generated {} matches for championship {}",
                matches.len(),
                path.id
            );
            HttpResponse::Created().json(serde_json::json!({
                "message": "Matches generated successfully",
                "count": matches.len(),
                "matches": matches,
            }))
        }
        Err(e) => error_response(&e),
    }
}

// ---- players ----

#[get("/api/players")]
async fn api_list_players(state: AppState, query: Query<ChampionshipFilter>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.list_players(query.championship_id))
}

#[post("/api/players")]
async fn api_create_player(state: AppState, body: Json<CreatePlayerBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.create_player(&body.name, &body.championship_ids) {
        Ok(p) => HttpResponse::Created().json(p),
        Err(e) => error_response(&e),
    }
}

#[get("/api/players/{id}")]
async fn api_get_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_player(path.id) {
        Ok(p) => HttpResponse::Ok().json(p),
        Err(e) => error_response(&e),
    }
}

#[put("/api/players/{id}")]
async fn api_update_player(
    state: AppState,
    path: Path<PlayerPath>,
    body: Json<UpdatePlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.update_player(path.id, body.name.as_deref(), body.championship_ids.as_deref()) {
        Ok(p) => HttpResponse::Ok().json(p),
        Err(e) => error_response(&e),
    }
}

#[delete("/api/players/{id}")]
async fn api_delete_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.delete_player(path.id) {
        Ok(()) => {
            HttpResponse::Ok().json(serde_json::json!({ "message": "Player deleted successfully" }))
        }
        Err(e) => error_response(&e),
    }
}

// ---- matches ----

#[get("/api/matches")]
async fn api_list_matches(state: AppState, query: Query<ChampionshipFilter>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.list_matches(query.championship_id))
}

/// Create a single match by hand. No delete counterpart: matches are never
/// deleted once created.
#[post("/api/matches")]
async fn api_create_match(state: AppState, body: Json<CreateMatchBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.create_match(
        body.championship_id,
        &body.player1,
        &body.player2,
        body.game.as_deref(),
    ) {
        Ok(m) => HttpResponse::Created().json(m),
        Err(e) => error_response(&e),
    }
}

#[get("/api/matches/{id}")]
async fn api_get_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_match(path.id) {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => error_response(&e),
    }
}

#[post("/api/matches/{id}/start")]
async fn api_start_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.start_match(path.id) {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => error_response(&e),
    }
}

#[put("/api/matches/{id}/score")]
async fn api_update_match_score(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.update_match_score(path.id, body.player1_score, body.player2_score) {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => error_response(&e),
    }
}

/// Finish a started match: the winner is derived from the score (equal
/// scores record a draw).
#[post("/api/matches/{id}/finish")]
async fn api_finish_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.finish_match(path.id) {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => error_response(&e),
    }
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

    let state = Data::new(RwLock::new(Store::new()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_list_championships)
            .service(api_create_championship)
            .service(api_get_championship)
            .service(api_update_championship)
            .service(api_delete_championship)
            .service(api_finalize_championship)
            .service(api_standings)
            .service(api_generate_matches)
            .service(api_list_players)
            .service(api_create_player)
            .service(api_get_player)
            .service(api_update_player)
            .service(api_delete_player)
            .service(api_list_matches)
            .service(api_create_match)
            .service(api_get_match)
            .service(api_start_match)
            .service(api_update_match_score)
            .service(api_finish_match)
    })
    .bind(bind)?
    .run()
    .await
}
