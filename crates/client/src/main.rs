//! saunalog-client CLI entry point.

use clap::Parser;
use saunalog_client::cli::{Cli, Commands};
use saunalog_client::client::saunas::SaunaSearch;
use saunalog_client::client::SaunalogClient;
use saunalog_client::output::{pretty, render};
use saunalog_core::sauna::{
    CreateFavoriteRequest, CreatePostRequest, CreateUserRequest, ListPostsQuery,
    RemoveFavoriteQuery, SearchSaunasQuery,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = SaunalogClient::new(&cli.base_url);
    let format = cli.format;

    match cli.command {
        Commands::Users(users_cmd) => {
            use saunalog_client::cli::users::UsersAction;
            match users_cmd.action {
                UsersAction::List => {
                    let users = client.list_users().await?;
                    println!("{}", render(&users, format, |u| pretty::format_users(u)));
                }
                UsersAction::Create { id, email, name } => {
                    let user = client
                        .upsert_user(&CreateUserRequest { id, email, name })
                        .await?;
                    println!(
                        "{}",
                        render(&user, format, |u| format!("Saved:\n{}", pretty::format_user(u)))
                    );
                }
                UsersAction::Get { id } => {
                    let user = client.get_user(&id).await?;
                    println!("{}", render(&user, format, pretty::format_user));
                }
            }
        }
        Commands::Posts(posts_cmd) => {
            use saunalog_client::cli::posts::PostsAction;
            match posts_cmd.action {
                PostsAction::List { sauna_id, user_id } => {
                    let posts = client
                        .list_posts(&ListPostsQuery { sauna_id, user_id })
                        .await?;
                    println!("{}", render(&posts, format, |p| pretty::format_post_views(p)));
                }
                PostsAction::Create {
                    user_id,
                    sauna_id,
                    content,
                } => {
                    let post = client
                        .create_post(&CreatePostRequest {
                            user_id,
                            sauna_id,
                            content,
                        })
                        .await?;
                    println!(
                        "{}",
                        render(&post, format, |p| format!(
                            "Created post #{} for sauna {}",
                            p.id, p.sauna_id
                        ))
                    );
                }
                PostsAction::Delete { id } => {
                    let message = client.delete_post(id).await?;
                    if !cli.quiet {
                        println!("{}", render(&message, format, |m| m.message.clone()));
                    }
                }
            }
        }
        Commands::Saunas(saunas_cmd) => {
            use saunalog_client::cli::saunas::SaunasAction;
            match saunas_cmd.action {
                SaunasAction::Search {
                    prefecture,
                    keyword,
                } => {
                    let search = client
                        .search_saunas(&SearchSaunasQuery {
                            prefecture,
                            keyword,
                        })
                        .await?;
                    println!(
                        "{}",
                        render(&search, format, |s| match s {
                            SaunaSearch::Hits(hits) => pretty::format_place_summaries(hits),
                            SaunaSearch::NoMatch(message) => message.message.clone(),
                        })
                    );
                }
                SaunasAction::Get { place_id } => {
                    let record = client.get_sauna(&place_id).await?;
                    println!("{}", render(&record, format, pretty::format_place_record));
                }
            }
        }
        Commands::Favorites(favorites_cmd) => {
            use saunalog_client::cli::favorites::FavoritesAction;
            match favorites_cmd.action {
                FavoritesAction::Add { user_id, sauna_id } => {
                    let created = client
                        .add_favorite(&CreateFavoriteRequest { user_id, sauna_id })
                        .await?;
                    println!(
                        "{}",
                        render(&created, format, |c| format!(
                            "{}\n{}",
                            c.message,
                            pretty::format_favorite(&c.favorite)
                        ))
                    );
                }
                FavoritesAction::List { user_id: None } => {
                    let favorites = client.list_favorites().await?;
                    println!(
                        "{}",
                        render(&favorites, format, |f| pretty::format_favorites(f))
                    );
                }
                FavoritesAction::List {
                    user_id: Some(user_id),
                } => {
                    let favorites = client.list_user_favorites(&user_id).await?;
                    println!(
                        "{}",
                        render(&favorites, format, |f| pretty::format_saunas(&f.favorites))
                    );
                }
                FavoritesAction::Remove { user_id, sauna_id } => {
                    let message = client
                        .remove_favorite(&RemoveFavoriteQuery { user_id, sauna_id })
                        .await?;
                    if !cli.quiet {
                        println!("{}", render(&message, format, |m| m.message.clone()));
                    }
                }
                FavoritesAction::RemoveById { id } => {
                    let message = client.remove_favorite_by_id(id).await?;
                    if !cli.quiet {
                        println!("{}", render(&message, format, |m| m.message.clone()));
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use saunalog_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Live => {
                    let alive = client.livez().await?;
                    if !cli.quiet {
                        println!("{}", if alive { "alive" } else { "not responding" });
                    }
                    if !alive {
                        std::process::exit(1);
                    }
                }
                HealthAction::Status => {
                    let health = client.healthz().await?;
                    println!(
                        "{}",
                        render(&health, format, |h| format!(
                            "Health: {}\n  Storage: {}\n  Places: {}",
                            h.status, h.storage, h.places
                        ))
                    );
                }
            }
        }
    }

    Ok(())
}
