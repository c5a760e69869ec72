use serde::Serialize;

use super::TeamMatchesView;

/// Win/loss/drawn counts across a team's latest match and recent history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResultTally {
    pub won: u32,
    pub lost: u32,
    pub drawn: u32,
}

impl ResultTally {
    /// Sum of the three recognized buckets. Matches whose status is absent
    /// or outside the three labels belong to no bucket, so the total can be
    /// smaller than the number of matches tallied.
    pub fn total(&self) -> u32 {
        self.won + self.lost + self.drawn
    }

    /// Label/count pairs in presentation order.
    pub fn entries(&self) -> [(&'static str, u32); 3] {
        [
            ("Won", self.won),
            ("Lost", self.lost),
            ("Drawn", self.drawn),
        ]
    }
}

impl TeamMatchesView {
    /// Tally match outcomes over `recent_matches` plus `latest_match`.
    ///
    /// The latest match is counted exactly once, in the same buckets as the
    /// history, which is how the upstream page derives its statistics chart.
    pub fn result_tally(&self) -> ResultTally {
        let mut tally = ResultTally::default();
        let statuses = self
            .recent_matches
            .iter()
            .chain(std::iter::once(&self.latest_match))
            .filter_map(|m| m.match_status.as_deref());
        for status in statuses {
            match status {
                "Won" => tally.won += 1,
                "Lost" => tally.lost += 1,
                "Drawn" => tally.drawn += 1,
                _ => {}
            }
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::super::MatchRecord;
    use super::*;

    fn with_status(status: &str) -> MatchRecord {
        MatchRecord {
            match_status: Some(status.to_string()),
            ..MatchRecord::default()
        }
    }

    fn view(latest: MatchRecord, recent: Vec<MatchRecord>) -> TeamMatchesView {
        TeamMatchesView {
            team_banner_url: Some("b.png".to_string()),
            latest_match: latest,
            recent_matches: recent,
        }
    }

    #[test]
    fn counts_latest_match_into_the_buckets() {
        let view = view(
            with_status("Won"),
            vec![
                with_status("Won"),
                with_status("Lost"),
                with_status("Drawn"),
                with_status("Lost"),
            ],
        );

        assert_eq!(
            view.result_tally(),
            ResultTally {
                won: 2,
                lost: 2,
                drawn: 1,
            }
        );
    }

    #[test]
    fn unrecognized_statuses_land_in_no_bucket() {
        let view = view(with_status("Abandoned"), vec![with_status("Abandoned")]);

        assert_eq!(view.result_tally(), ResultTally::default());
        assert_eq!(view.result_tally().total(), 0);
    }

    #[test]
    fn absent_status_matches_no_label() {
        let view = view(
            MatchRecord::default(),
            vec![with_status("Won"), MatchRecord::default()],
        );

        let tally = view.result_tally();
        assert_eq!(tally.won, 1);
        assert_eq!(tally.lost, 0);
        assert_eq!(tally.drawn, 0);
    }

    #[test]
    fn total_is_bounded_by_match_count() {
        let view = view(
            with_status("Tied"),
            vec![
                with_status("Won"),
                with_status("Won"),
                with_status("No Result"),
            ],
        );

        let tally = view.result_tally();
        assert!(tally.total() <= view.recent_matches.len() as u32 + 1);
        assert_eq!(tally.total(), 2);
    }

    #[test]
    fn all_recognized_statuses_reach_the_upper_bound() {
        let view = view(
            with_status("Drawn"),
            vec![with_status("Won"), with_status("Lost")],
        );

        let tally = view.result_tally();
        assert_eq!(tally.total(), view.recent_matches.len() as u32 + 1);
    }

    #[test]
    fn latest_match_is_counted_exactly_once() {
        let view = view(with_status("Won"), vec![]);

        assert_eq!(view.result_tally().won, 1);
    }

    #[test]
    fn entries_expose_the_three_labels_in_order() {
        let view = view(with_status("Won"), vec![with_status("Lost")]);

        assert_eq!(
            view.result_tally().entries(),
            [("Won", 1), ("Lost", 1), ("Drawn", 0)]
        );
    }
}
