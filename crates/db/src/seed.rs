//! Demo data for a fresh installation.
//!
//! Every step looks up what it is about to create first, so running the seed
//! twice leaves the database unchanged. Password hashing is the caller's job;
//! this module only receives finished hashes.

use sqlx::PgPool;
use teamwiki_core::pages::FIRST_VERSION;
use teamwiki_core::roles::Role;
use teamwiki_core::types::DbId;

use crate::models::page::CreatePage;
use crate::models::user::{CreateUser, User};
use crate::repositories::{CommentRepo, PageRepo, PageVersionRepo, TagRepo, UserRepo};

pub const WELCOME_TITLE: &str = "Willkommen";
pub const WELCOME_CONTENT: &str = "# Team-Wiki\n\nStartseite.";
pub const WELCOME_COMMENT: &str = "Bitte ergänzen wir noch Onboarding-Infos.";
pub const WELCOME_TAGS: [&str; 2] = ["guide", "start"];

/// Why the demo seed could not be applied.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed needs at least one {0} account")]
    MissingAccount(Role),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// One demo account with its already hashed password.
#[derive(Debug)]
pub struct SeedAccount {
    pub name: &'static str,
    pub email: &'static str,
    pub role: Role,
    pub password_hash: String,
}

/// What the seed created or found.
#[derive(Debug)]
pub struct SeedReport {
    pub users_created: usize,
    pub page_id: DbId,
    pub page_created: bool,
    pub comment_created: bool,
}

/// Insert the demo accounts, tags, welcome page and first comment.
///
/// The welcome page is authored by the first `ADMIN` account and the comment
/// by the first `EDITOR` account in `accounts`; both must be present.
pub async fn seed_demo(pool: &PgPool, accounts: &[SeedAccount]) -> Result<SeedReport, SeedError> {
    let mut users_created = 0;
    let mut users: Vec<User> = Vec::with_capacity(accounts.len());
    for account in accounts {
        let user = match UserRepo::find_by_email(pool, account.email).await? {
            Some(existing) => existing,
            None => {
                users_created += 1;
                UserRepo::create(
                    pool,
                    &CreateUser {
                        name: account.name.to_string(),
                        email: account.email.to_string(),
                        password_hash: account.password_hash.clone(),
                        role: account.role,
                    },
                )
                .await?
            }
        };
        users.push(user);
    }

    let admin = users
        .iter()
        .find(|u| u.role == Role::Admin)
        .ok_or(SeedError::MissingAccount(Role::Admin))?;
    let editor = users
        .iter()
        .find(|u| u.role == Role::Editor)
        .ok_or(SeedError::MissingAccount(Role::Editor))?;

    let mut tag_ids = Vec::with_capacity(WELCOME_TAGS.len());
    for name in WELCOME_TAGS {
        tag_ids.push(TagRepo::find_or_create(pool, name).await?.id);
    }

    let (page, page_created) = match PageRepo::find_by_title(pool, WELCOME_TITLE).await? {
        Some(page) => (page, false),
        None => {
            let page = PageRepo::create(
                pool,
                &CreatePage {
                    title: WELCOME_TITLE,
                    content: WELCOME_CONTENT,
                    author_id: admin.id,
                    parent_id: None,
                },
            )
            .await?;
            (page, true)
        }
    };

    if PageVersionRepo::find_by_page_and_version(pool, page.id, FIRST_VERSION)
        .await?
        .is_none()
    {
        PageVersionRepo::create(pool, page.id, FIRST_VERSION, &page.title, &page.content).await?;
    }

    for tag_id in tag_ids {
        TagRepo::link(pool, page.id, tag_id).await?;
    }

    let comment_created =
        !CommentRepo::exists_with_content(pool, page.id, editor.id, WELCOME_COMMENT).await?;
    if comment_created {
        CommentRepo::create(pool, page.id, editor.id, None, WELCOME_COMMENT).await?;
    }

    tracing::info!(
        users_created,
        page_id = page.id,
        page_created,
        comment_created,
        "Demo seed applied",
    );

    Ok(SeedReport {
        users_created,
        page_id: page.id,
        page_created,
        comment_created,
    })
}
