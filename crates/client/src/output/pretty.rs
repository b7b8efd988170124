//! Pretty output formatting.

use saunalog_core::places::{PlaceRecord, PlaceSummary};
use saunalog_core::sauna::{Favorite, PostView, Sauna, User};

/// Format a user for display.
pub fn format_user(user: &User) -> String {
    let name = user.name.as_deref().unwrap_or("(no name)");
    format!("{}\n  ID: {}\n  Email: {}", name, user.id, user.email)
}

/// Format users for display.
pub fn format_users(users: &[User]) -> String {
    format_list("USERS", "No users found.", users, format_user)
}

/// Format a post with its embedded user and sauna.
pub fn format_post_view(view: &PostView) -> String {
    let author = view.user.name.as_deref().unwrap_or(&view.user.id);
    let mut output = format!(
        "#{} {} @ {}\n  Posted: {}",
        view.post.id, author, view.sauna.name, view.post.created_at
    );
    if let Some(content) = &view.post.content {
        output.push_str(&format!("\n  {}", content));
    }
    output
}

pub fn format_post_views(views: &[PostView]) -> String {
    format_list("POSTS", "No posts found.", views, format_post_view)
}

/// Format a search hit for display.
pub fn format_place_summary(summary: &PlaceSummary) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  Address: {}",
        summary.name, summary.id, summary.address
    );
    if let Some(rating) = summary.rating {
        output.push_str(&format!("\n  Rating: {:.1}", rating));
    }
    output
}

pub fn format_place_summaries(summaries: &[PlaceSummary]) -> String {
    format_list("SAUNAS", "No saunas found.", summaries, format_place_summary)
}

/// Format a full place record for display.
pub fn format_place_record(record: &PlaceRecord) -> String {
    let mut output = format!(
        "{} ({})\n  ID: {}\n  Address: {}",
        record.name, record.prefecture, record.id, record.address
    );
    if let (Some(lat), Some(lng)) = (record.latitude, record.longitude) {
        output.push_str(&format!("\n  Location: {:.5}, {:.5}", lat, lng));
    }
    if let Some(rating) = record.rating {
        output.push_str(&format!("\n  Rating: {:.1}", rating));
    }
    if !record.photos.is_empty() {
        output.push_str(&format!("\n  Photos: {}", record.photos.len()));
    }
    output
}

/// Format a stored sauna for display.
pub fn format_sauna(sauna: &Sauna) -> String {
    format!(
        "{} ({})\n  ID: {}\n  Address: {}",
        sauna.name, sauna.prefecture, sauna.id, sauna.address
    )
}

pub fn format_saunas(saunas: &[Sauna]) -> String {
    format_list("FAVORITE SAUNAS", "No favorites found.", saunas, format_sauna)
}

pub fn format_favorite(favorite: &Favorite) -> String {
    format!(
        "#{}\n  User: {}\n  Sauna: {}",
        favorite.id, favorite.user_id, favorite.sauna_id
    )
}

pub fn format_favorites(favorites: &[Favorite]) -> String {
    format_list("FAVORITES", "No favorites found.", favorites, format_favorite)
}

fn format_list<T>(title: &str, empty: &str, items: &[T], format: fn(&T) -> String) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    let mut output = format!("{} ({})\n", title, items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format(item)));
        output.push('\n');
    }
    output
}
