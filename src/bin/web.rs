//! Single binary web server: the league store behind a REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//!
//! State is one in-memory [`LeagueStore`] behind a RwLock (single-writer
//! discipline); it seeds from mock data on startup and /api/reset reseeds.

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use local_league_web::{
    follower_count, following_count, match_feed, standings, team_form, Arena, ChatMessage,
    ContextFilter, Formation, LeagueError, LeagueStore, MatchEvent, MatchEventKind, MatchKind,
    MatchMedia, MatchRecord, MatchStatus, MediaKind, Role, Sport, StandingsScope, StatusFilter,
    Team, Tournament, TournamentFormat, TournamentId, UserAccount,
};
use serde::Deserialize;
use std::sync::RwLock;
use uuid::Uuid;

/// Shared state: the whole league, one writer at a time.
type AppState = Data<RwLock<LeagueStore>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn bad_request(e: LeagueError) -> HttpResponse {
    let mut builder = match e {
        LeagueError::PermissionDenied => HttpResponse::Forbidden(),
        LeagueError::MatchNotFound(_)
        | LeagueError::TeamNotFound(_)
        | LeagueError::TournamentNotFound(_)
        | LeagueError::NotificationNotFound(_)
        | LeagueError::UserNotFound => HttpResponse::NotFound(),
        _ => HttpResponse::BadRequest(),
    };
    builder.json(serde_json::json!({ "error": e.to_string() }))
}

#[derive(Deserialize)]
struct IdPath {
    id: Uuid,
}

#[derive(Deserialize)]
struct ActorQuery {
    user_id: Uuid,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "local-league-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

// --- Accounts ---

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

#[post("/api/login")]
async fn api_login(state: AppState, body: Json<LoginBody>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.login(&body.email, &body.password) {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(_) => {
            HttpResponse::Unauthorized().json(serde_json::json!({ "error": "Bad credentials" }))
        }
    }
}

#[derive(Deserialize)]
struct RegisterBody {
    email: String,
    password: String,
    name: String,
    role: Role,
    team_id: Option<Uuid>,
    #[serde(default)]
    location: String,
}

#[post("/api/register")]
async fn api_register(state: AppState, body: Json<RegisterBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let body = body.into_inner();
    let account = UserAccount::new(
        body.email,
        body.password,
        body.name,
        body.role,
        body.team_id,
        body.location,
    );
    match g.register(account) {
        Ok(id) => match g.user(id) {
            Some(user) => HttpResponse::Ok().json(user),
            None => lock_error(),
        },
        Err(e) => bad_request(e),
    }
}

/// Drop everything and reseed the mock league.
#[post("/api/reset")]
async fn api_reset(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    g.reset();
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

// --- Teams ---

#[get("/api/teams")]
async fn api_list_teams(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(g.active_teams())
}

#[derive(Deserialize)]
struct CreateTeamBody {
    user_id: Uuid,
    name: String,
    short_name: Option<String>,
    #[serde(default)]
    city: String,
}

#[post("/api/teams")]
async fn api_create_team(state: AppState, body: Json<CreateTeamBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if !g.can_manage(body.user_id) {
        return bad_request(LeagueError::PermissionDenied);
    }
    let short = body
        .short_name
        .clone()
        .unwrap_or_else(|| body.name.chars().take(3).collect::<String>().to_uppercase());
    let team = Team::new(body.name.clone(), short, body.city.clone(), body.user_id);
    let id = g.create_team(team);
    HttpResponse::Ok().json(g.team(id))
}

#[derive(serde::Serialize)]
struct TeamDetail {
    team: Team,
    form: Vec<local_league_web::FormOutcome>,
    followers: usize,
}

/// Team page payload: the team (a ghost when unknown), its recent form, and
/// its follower count.
#[get("/api/teams/{id}")]
async fn api_team_detail(state: AppState, path: Path<IdPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let team = g.team(path.id);
    let matches = g.active_matches();
    let detail = TeamDetail {
        form: team_form(team.id, &matches),
        followers: follower_count(&g.social, team.id),
        team,
    };
    HttpResponse::Ok().json(detail)
}

#[delete("/api/teams/{id}")]
async fn api_delete_team(
    state: AppState,
    path: Path<IdPath>,
    query: Query<ActorQuery>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.delete_team(path.id, query.user_id) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
        Err(e) => bad_request(e),
    }
}

#[derive(Deserialize)]
struct FormationBody {
    formation: Formation,
}

/// Apply a formation preset (4-4-2 / 4-3-3 / 3-5-2) to the team's roster.
#[put("/api/teams/{id}/formation")]
async fn api_team_formation(
    state: AppState,
    path: Path<IdPath>,
    body: Json<FormationBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.apply_formation_preset(path.id, body.formation) {
        Ok(()) => HttpResponse::Ok().json(g.team(path.id)),
        Err(e) => bad_request(e),
    }
}

// --- Standings & feed ---

#[derive(Deserialize)]
struct StandingsQuery {
    tournament_id: Option<TournamentId>,
}

/// Standings table: tournament-scoped (participating teams only) when a
/// known tournament id is given, league-wide otherwise.
#[get("/api/standings")]
async fn api_standings(state: AppState, query: Query<StandingsQuery>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let teams = g.active_teams();
    let matches = g.active_matches();

    let scoped = query
        .tournament_id
        .and_then(|id| g.active_tournaments().into_iter().find(|t| t.id == id).cloned());
    let rows = match scoped {
        Some(tournament) => {
            let participants: Vec<&Team> = teams
                .into_iter()
                .filter(|t| tournament.participating_team_ids.contains(&t.id))
                .collect();
            standings(
                &participants,
                &matches,
                StandingsScope::Tournament(tournament.id),
            )
        }
        None => standings(&teams, &matches, StandingsScope::All),
    };
    HttpResponse::Ok().json(rows)
}

#[derive(Deserialize)]
struct FeedQuery {
    user_id: Uuid,
    #[serde(default)]
    status: String,
    #[serde(default)]
    context: String,
}

/// The mine/other match feed for the given user. Unknown status/context
/// values fall back to "all".
#[get("/api/feed")]
async fn api_feed(state: AppState, query: Query<FeedQuery>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let viewer = match g.user(query.user_id) {
        Some(u) => u.viewer(),
        None => {
            return HttpResponse::Unauthorized()
                .json(serde_json::json!({ "error": "Unknown user" }))
        }
    };
    let matches = g.active_matches();
    let tournaments = g.active_tournaments();
    let status = StatusFilter::from_param(&query.status);
    let context = ContextFilter::from_param(&query.context, &tournaments);
    let feed = match_feed(&matches, viewer, &g.social, &tournaments, status, context);
    HttpResponse::Ok().json(feed)
}

// --- Matches ---

#[derive(Deserialize)]
struct SaveMatchBody {
    user_id: Uuid,
    id: Option<Uuid>,
    home_team_id: Uuid,
    away_team_id: Uuid,
    date: DateTime<Utc>,
    arena_id: Uuid,
    kind: MatchKind,
    sport: Sport,
    tournament_id: Option<Uuid>,
    round: Option<String>,
}

/// Create a match, or update an existing one's details (scores, events and
/// chat are preserved on update).
#[post("/api/matches")]
async fn api_save_match(state: AppState, body: Json<SaveMatchBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if !g.can_manage(body.user_id) {
        return bad_request(LeagueError::PermissionDenied);
    }
    let body = body.into_inner();
    let mut record = match body.id.and_then(|id| g.match_record(id).cloned()) {
        Some(existing) => existing,
        None => MatchRecord::new(
            body.home_team_id,
            body.away_team_id,
            body.date,
            body.arena_id,
            body.kind,
            body.sport,
            body.user_id,
        ),
    };
    record.home_team_id = body.home_team_id;
    record.away_team_id = body.away_team_id;
    record.date = body.date;
    record.arena_id = body.arena_id;
    record.kind = body.kind;
    record.sport = body.sport;
    record.tournament_id = body.tournament_id;
    record.round = body.round;
    let id = g.save_match(record);
    match g.match_record(id) {
        Some(m) => HttpResponse::Ok().json(m),
        None => lock_error(),
    }
}

#[derive(Deserialize)]
struct ScoreBody {
    home_score: u32,
    away_score: u32,
    status: MatchStatus,
}

#[put("/api/matches/{id}/score")]
async fn api_update_score(
    state: AppState,
    path: Path<IdPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.update_score(path.id, body.home_score, body.away_score, body.status) {
        Ok(()) => match g.match_record(path.id) {
            Some(m) => HttpResponse::Ok().json(m),
            None => lock_error(),
        },
        Err(e) => bad_request(e),
    }
}

#[derive(Deserialize)]
struct EventBody {
    kind: MatchEventKind,
    minute: u32,
    team_id: Option<Uuid>,
    player_id: Option<Uuid>,
}

/// Append a live event (start/goal/card/end). Goals bump the score, player
/// events bump the player's counters, end finishes the match.
#[post("/api/matches/{id}/events")]
async fn api_record_event(
    state: AppState,
    path: Path<IdPath>,
    body: Json<EventBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let mut event = MatchEvent::new(body.kind, body.minute);
    event.team_id = body.team_id;
    event.player_id = body.player_id;
    match g.record_event(path.id, event) {
        Ok(()) => match g.match_record(path.id) {
            Some(m) => HttpResponse::Ok().json(m),
            None => lock_error(),
        },
        Err(e) => bad_request(e),
    }
}

#[derive(Deserialize)]
struct ChatBody {
    user_id: Uuid,
    text: String,
}

#[post("/api/matches/{id}/chat")]
async fn api_send_chat(state: AppState, path: Path<IdPath>, body: Json<ChatBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let (user_name, team_id) = match g.user(body.user_id) {
        Some(u) => (u.name.clone(), u.team_id),
        None => return bad_request(LeagueError::UserNotFound),
    };
    let message = ChatMessage {
        id: Uuid::new_v4(),
        user_id: body.user_id,
        user_name,
        text: body.text.clone(),
        timestamp: Utc::now(),
        team_id,
    };
    match g.send_chat(path.id, message) {
        Ok(()) => match g.match_record(path.id) {
            Some(m) => HttpResponse::Ok().json(m),
            None => lock_error(),
        },
        Err(e) => bad_request(e),
    }
}

#[derive(Deserialize)]
struct MediaBody {
    user_id: Uuid,
    kind: MediaKind,
    url: String,
}

#[post("/api/matches/{id}/media")]
async fn api_add_media(state: AppState, path: Path<IdPath>, body: Json<MediaBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let uploaded_by = match g.user(body.user_id) {
        Some(u) => u.name.clone(),
        None => return bad_request(LeagueError::UserNotFound),
    };
    let media = MatchMedia {
        id: Uuid::new_v4(),
        kind: body.kind,
        url: body.url.clone(),
        uploaded_by,
        created_at: Utc::now(),
    };
    match g.add_media(path.id, media) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
        Err(e) => bad_request(e),
    }
}

#[delete("/api/matches/{id}")]
async fn api_delete_match(
    state: AppState,
    path: Path<IdPath>,
    query: Query<ActorQuery>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.delete_match(path.id, query.user_id) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
        Err(e) => bad_request(e),
    }
}

// --- Tournaments & arenas ---

#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(g.active_tournaments())
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    user_id: Uuid,
    name: String,
    format: TournamentFormat,
    sport: Sport,
    #[serde(default = "default_total_rounds")]
    total_rounds: u32,
}

fn default_total_rounds() -> u32 {
    10
}

#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if !g.can_manage(body.user_id) {
        return bad_request(LeagueError::PermissionDenied);
    }
    let tournament = Tournament::new(
        body.name.clone(),
        body.format,
        body.sport,
        body.total_rounds,
        body.user_id,
    );
    let id = g.create_tournament(tournament);
    match g.tournament(id) {
        Some(t) => HttpResponse::Ok().json(t),
        None => lock_error(),
    }
}

#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(
    state: AppState,
    path: Path<IdPath>,
    query: Query<ActorQuery>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.delete_tournament(path.id, query.user_id) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
        Err(e) => bad_request(e),
    }
}

#[get("/api/arenas")]
async fn api_list_arenas(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(&g.arenas)
}

#[derive(Deserialize)]
struct CreateArenaBody {
    user_id: Uuid,
    name: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lng: f64,
}

#[post("/api/arenas")]
async fn api_create_arena(state: AppState, body: Json<CreateArenaBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if !g.can_manage(body.user_id) {
        return bad_request(LeagueError::PermissionDenied);
    }
    let arena = Arena::new(body.name.clone(), body.address.clone(), body.lat, body.lng);
    let id = g.create_arena(arena);
    HttpResponse::Ok().json(g.arena(id))
}

// --- Social & notifications ---

#[derive(Deserialize)]
struct FollowBody {
    user_id: Uuid,
    target_id: Uuid,
    target_type: local_league_web::TargetType,
}

#[post("/api/follow")]
async fn api_follow(state: AppState, body: Json<FollowBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let following = g.toggle_follow(body.user_id, body.target_id, body.target_type);
    HttpResponse::Ok().json(serde_json::json!({ "following": following }))
}

#[get("/api/users/{id}/social")]
async fn api_social_counts(state: AppState, path: Path<IdPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(serde_json::json!({
        "followers": follower_count(&g.social, path.id),
        "following": following_count(&g.social, path.id),
    }))
}

#[get("/api/users/{id}/notifications")]
async fn api_notifications(state: AppState, path: Path<IdPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(g.unread_notifications(path.id))
}

#[derive(Deserialize)]
struct AcceptBody {
    user_id: Uuid,
}

#[post("/api/notifications/{id}/accept")]
async fn api_accept_notification(
    state: AppState,
    path: Path<IdPath>,
    body: Json<AcceptBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.accept_notification(path.id, body.user_id) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
        Err(e) => bad_request(e),
    }
}

#[derive(Deserialize)]
struct TeamInviteBody {
    user_id: Uuid,
    team_id: Uuid,
    email: String,
}

#[post("/api/invites/team")]
async fn api_team_invite(state: AppState, body: Json<TeamInviteBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.send_team_invite(body.user_id, body.team_id, &body.email) {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "notification_id": id })),
        Err(e) => bad_request(e),
    }
}

#[derive(Deserialize)]
struct TournamentInviteBody {
    user_id: Uuid,
    tournament_id: Uuid,
    team_id: Uuid,
}

#[post("/api/invites/tournament")]
async fn api_tournament_invite(state: AppState, body: Json<TournamentInviteBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.send_tournament_invite(body.user_id, body.tournament_id, body.team_id) {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "notification_id": id })),
        Err(e) => bad_request(e),
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

    let store = LeagueStore::seeded();
    log::info!(
        "Seeded league: {} teams, {} matches, {} tournaments, {} accounts",
        store.teams.len(),
        store.matches.len(),
        store.tournaments.len(),
        store.users.len()
    );
    let state = Data::new(RwLock::new(store));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_login)
            .service(api_register)
            .service(api_reset)
            .service(api_list_teams)
            .service(api_create_team)
            .service(api_team_detail)
            .service(api_delete_team)
            .service(api_team_formation)
            .service(api_standings)
            .service(api_feed)
            .service(api_save_match)
            .service(api_update_score)
            .service(api_record_event)
            .service(api_send_chat)
            .service(api_add_media)
            .service(api_delete_match)
            .service(api_list_tournaments)
            .service(api_create_tournament)
            .service(api_delete_tournament)
            .service(api_list_arenas)
            .service(api_create_arena)
            .service(api_follow)
            .service(api_social_counts)
            .service(api_notifications)
            .service(api_accept_notification)
            .service(api_team_invite)
            .service(api_tournament_invite)
    })
    .bind(bind)?
    .run()
    .await
}
