//! # Example: screen_basic
//!
//! The smallest useful wiring: a canned API, console presenters, no
//! subscribers. Shows the lifecycle contract — construction loads nothing,
//! the visibility transition loads once, selection hands the rendered value
//! to the detail collaborator.
//!
//! ## Run
//! ```bash
//! cargo run --example screen_basic
//! ```

use std::sync::Arc;

use loadvisor::{
    ApiFn, Config, DetailPresenter, ErrorPresenter, Friend, FriendsScreen, LoadResult,
};

struct Console;

impl DetailPresenter for Console {
    fn show(&self, friend: &Friend) {
        println!("[detail] {} ({})", friend.name, friend.phone);
    }
}

impl ErrorPresenter for Console {
    fn show_error(&self, message: &str) {
        println!("[alert] Error: {message}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let api = ApiFn::arc(|| async {
        LoadResult::Ok(vec![
            Friend::new("Friend1", "phone1"),
            Friend::new("Friend2", "phone2"),
        ])
    });

    let console = Arc::new(Console);
    let mut screen = FriendsScreen::new(
        Config::default(),
        api,
        console.clone(),
        console,
        Vec::new(),
    );

    println!("[main] rows before visibility: {}", screen.row_count());

    screen.became_visible().await;
    println!("[main] rows after visibility:  {}", screen.row_count());

    screen.select_row(1);
    screen.dismiss();
}
