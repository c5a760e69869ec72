use std::time::Duration;

use strum::IntoEnumIterator;
use tokio::time::sleep;

use ipl_stats::{IplClient, TeamCode};

#[tokio::main]
async fn main() {
    let client = IplClient::new();

    let teams = client.get_teams().await.unwrap();
    println!("Upstream lists {} franchises:", teams.len());
    for team in &teams {
        println!("  {:<4} {}", team.id, team.name);
    }

    // One code from the command line, or the whole known set.
    let codes: Vec<String> = match std::env::args().nth(1) {
        Some(code) => vec![code],
        None => TeamCode::iter().map(|c| c.to_string()).collect(),
    };

    for code in codes {
        let view = client.get_team_matches(&code).await.unwrap();
        let tally = view.result_tally();

        println!("\n=== {code} ===");
        if let Some(opponent) = &view.latest_match.competing_team {
            println!(
                "latest: vs {opponent}: {}",
                view.latest_match.result.as_deref().unwrap_or("result unknown")
            );
        }
        for (label, count) in tally.entries() {
            println!("{label:>6}: {count}");
        }
        println!(
            " total: {} of {} matches",
            tally.total(),
            view.recent_matches.len() + 1
        );

        sleep(Duration::from_millis(100)).await;
    }
}
