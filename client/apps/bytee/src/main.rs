//! bytee Client Entry Point
//!
//! Wires configuration, the persisted credential, the HTTP gateway and the
//! resource clients together, then drives one page per invocation.
//! Uses `anyhow` for startup errors; page failures are surfaced through
//! the notification sink like any other host would.
//!
//! ```text
//! bytee                      session + forum, events and exchanges
//! bytee sign-in              uses BYTEE_USERNAME / BYTEE_PASSWORD
//! bytee sign-out
//! bytee profile <username>
//! bytee exchanges [query]
//! bytee coach <message>
//! bytee trust <reviews>
//! ```

use std::env;
use std::sync::Arc;

use account::{AccountAppState, HttpUserRepository};
use assistant::{AssistantAppState, GeminiClient};
use community::{
    CommunityAppState, HttpEventRepository, HttpExchangeRepository, HttpPostRepository,
};
use platform::client::HttpGateway;
use platform::config::ClientConfig;
use platform::logging;
use platform::notify::TracingSink;
use platform::storage::FileTokenStore;

type Gateway = HttpGateway<FileTokenStore>;
type Account = AccountAppState<HttpUserRepository<Gateway>, FileTokenStore>;
type Community = CommunityAppState<
    HttpPostRepository<Gateway>,
    HttpEventRepository<Gateway>,
    HttpExchangeRepository<Gateway>,
>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?;
    logging::init(&format!("bytee=info,{}", logging::DEFAULT_FILTER));

    let tokens = Arc::new(FileTokenStore::in_dir(&config.storage_dir, &config.token_key));
    let gateway = Arc::new(HttpGateway::new(&config, tokens.clone()));

    tracing::info!(
        api_base = %config.api_base,
        token_path = %tokens.path().display(),
        "Client configured"
    );

    let account = AccountAppState::new(Arc::new(HttpUserRepository::new(gateway.clone())), tokens);
    let community = CommunityAppState::new(
        Arc::new(HttpPostRepository::new(gateway.clone())),
        Arc::new(HttpEventRepository::new(gateway.clone())),
        Arc::new(HttpExchangeRepository::new(gateway)),
    );
    let assistant = AssistantAppState::new(Arc::new(GeminiClient::from_config(&config)));

    let args: Vec<String> = env::args().skip(1).collect();
    let rest = args.get(1..).unwrap_or_default().join(" ");

    match args.first().map(String::as_str) {
        None => {
            show_session(&account).await;
            show_boards(&community, "").await;
        }
        Some("sign-in") => sign_in(&account).await?,
        Some("sign-out") => {
            let route = account.session_bar().sign_out();
            tracing::info!(route = %route, "Signed out");
        }
        Some("profile") => {
            let mut page = account.profile_page();
            page.load(&rest, &TracingSink).await;
            if let Some(profile) = page.profile() {
                tracing::info!(
                    username = %profile.username,
                    rating = ?profile.rating(),
                    credits = ?profile.credits,
                    skills_offered = ?profile.skills_offered,
                    "Profile"
                );
            }
        }
        Some("exchanges") => show_boards(&community, &rest).await,
        Some("coach") => {
            let mut page = assistant.coach_chat_page();
            *page.input_mut() = rest;
            page.send(&TracingSink).await;
            if let Some(reply) = page.messages().last() {
                tracing::info!(role = %reply.role, "{}", reply.content);
            }
        }
        Some("trust") => {
            let mut page = assistant.trust_score_page();
            *page.reviews_mut() = rest;
            page.calculate(&TracingSink).await;
            if let Some(assessment) = page.assessment() {
                tracing::info!(score = %assessment.display_score(), "{}", assessment.analysis);
            }
        }
        Some(other) => anyhow::bail!("unknown command: {other}"),
    }

    Ok(())
}

async fn show_session(account: &Account) {
    let mut bar = account.session_bar();
    bar.refresh().await;
    match bar.user() {
        Some(user) => tracing::info!(username = %user.username, "Signed in"),
        None => tracing::info!("Not signed in"),
    }
}

async fn sign_in(account: &Account) -> anyhow::Result<()> {
    let mut form = account.sign_in_form();
    let draft = form.draft_mut();
    draft.username = env::var("BYTEE_USERNAME")?;
    draft.password = env::var("BYTEE_PASSWORD")?;

    if let Some(route) = form.submit(&TracingSink).await {
        tracing::info!(route = %route, "Navigate");
    }
    Ok(())
}

async fn show_boards(community: &Community, query: &str) {
    let sink = TracingSink;

    if query.is_empty() {
        let mut forum = community.forum_page();
        if forum.load(&sink).await {
            for post in forum.posts() {
                tracing::info!(
                    score = post.vote_score,
                    comments = post.comment_count,
                    author = %post.author_username,
                    "{}",
                    post.title
                );
            }
        }

        let mut events = community.event_board_page();
        if events.load(&sink).await {
            for event in events.events() {
                tracing::info!(
                    location = %event.location,
                    starts_at = ?event.starts_at,
                    participants = event.participant_count,
                    "{}",
                    event.title
                );
            }
        }
    }

    let mut exchanges = community.exchange_board_page();
    exchanges.set_query(query);
    if exchanges.load(&sink).await {
        for request in exchanges.filtered() {
            tracing::info!(
                creator = %request.creator_username,
                credits_requested = request.credits_requested,
                responses = request.response_count,
                path = %request.detail_path(),
                "{}",
                request.title
            );
        }
    }
}
