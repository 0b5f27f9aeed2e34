//! Tests for the medal tally.

use std::collections::HashSet;

use proptest::prelude::*;

use podium_core::tally;
use podium_model::RowSet;

const RESULT_HEADERS: &[&str] = &[
    "edition",
    "edition_id",
    "country_noc",
    "event",
    "athlete_id",
    "medal",
    "isTeamSport",
];

fn countries() -> RowSet {
    RowSet::from_strs(
        &["noc", "country"],
        &[&["FRA", "France"], &["USA", "United States"]],
    )
}

fn games() -> RowSet {
    RowSet::from_strs(
        &["edition", "edition_id", "year"],
        &[
            &["1896 Summer Olympics", "1", "1896"],
            &["2024 Summer Olympics", "61", "2024"],
        ],
    )
}

fn render(table: &RowSet) -> String {
    let mut out = table.headers.join(",");
    for row in &table.rows {
        out.push('\n');
        out.push_str(&row.join(","));
    }
    out
}

#[test]
fn test_target_team_medal_counts_once() {
    let results = RowSet::from_strs(
        RESULT_HEADERS,
        &[
            &["2024 Summer Olympics", "61", "FRA", "4 x 100m Relay", "1", "Gold", "True"],
            &["2024 Summer Olympics", "61", "FRA", "4 x 100m Relay", "2", "Gold", "True"],
            &["2024 Summer Olympics", "61", "FRA", "4 x 100m Relay", "3", "Gold", "True"],
        ],
    );
    let out = tally(&results, &countries(), &games(), Some("61")).unwrap();
    assert_eq!(out.len(), 1);
    let row = &out.rows[0];
    assert_eq!(row[4], "3");
    assert_eq!(row[5], "1");
    assert_eq!(row[8], "1");
}

#[test]
fn test_historical_team_medals_are_not_collapsed() {
    let results = RowSet::from_strs(
        RESULT_HEADERS,
        &[
            &["1896 Summer Olympics", "1", "FRA", "Rowing Eights", "1", "Gold", "True"],
            &["1896 Summer Olympics", "1", "FRA", "Rowing Eights", "2", "Gold", "True"],
        ],
    );
    let out = tally(&results, &countries(), &games(), Some("61")).unwrap();
    assert_eq!(out.rows[0][5], "2");
}

#[test]
fn test_participation_and_ignored_medals() {
    let results = RowSet::from_strs(
        RESULT_HEADERS,
        &[
            &["2024 Summer Olympics", "61", "USA", "100m", "5", "Gold", "False"],
            &["2024 Summer Olympics", "61", "USA", "200m", "5", "", "False"],
            &["2024 Summer Olympics", "61", "USA", "400m", "6", "DNS", "False"],
            &["2024 Summer Olympics", "61", "USA", "800m", "", "Gold", "False"],
            &["2024 Summer Olympics", "", "USA", "800m", "7", "Gold", "False"],
        ],
    );
    let out = tally(&results, &countries(), &games(), Some("61")).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out.rows[0][4], "2");
    assert_eq!(out.rows[0][5], "1");
    assert_eq!(out.rows[0][8], "1");
}

#[test]
fn test_fallbacks_and_sort_order() {
    let results = RowSet::from_strs(
        RESULT_HEADERS,
        &[
            &["2024 Summer Olympics", "61", "USA", "100m", "5", "Silver", "False"],
            &["Intercalated Games", "x", "GRE", "Marathon", "9", "Bronze", "False"],
            &["2024 Summer Olympics", "61", "FRA", "Judo", "4", "Bronze", "False"],
            &["1896 Summer Olympics", "1", "FRA", "Fencing", "3", "Gold", "False"],
        ],
    );
    let out = tally(&results, &countries(), &games(), Some("61")).unwrap();
    insta::assert_snapshot!(render(&out), @r"
    edition,edition_id,Country,NOC,number_of_athletes,gold_medal_count,silver_medal_count,bronze_medal_count,total_medals
    Intercalated Games,x,GRE,GRE,1,0,0,1,1
    1896 Summer Olympics,1,France,FRA,1,1,0,0,1
    2024 Summer Olympics,61,France,FRA,1,0,0,1,1
    2024 Summer Olympics,61,United States,USA,1,0,1,0,1
    ");
}

#[test]
fn test_mixed_case_nocs_share_a_group() {
    let results = RowSet::from_strs(
        RESULT_HEADERS,
        &[
            &["2024 Summer Olympics", "61", "FRA", "Judo", "4", "Bronze", "False"],
            &["2024 Summer Olympics", "61", " fra ", "Fencing", "8", "Gold", "False"],
        ],
    );
    let out = tally(&results, &countries(), &games(), Some("61")).unwrap();
    assert_eq!(out.len(), 1);
    let row = &out.rows[0];
    assert_eq!(row[2], "France");
    assert_eq!(row[3], "FRA");
    assert_eq!(row[4], "2");
    assert_eq!(row[8], "2");
}

#[test]
fn test_team_medals_without_event_are_not_collapsed() {
    let results = RowSet::from_strs(
        RESULT_HEADERS,
        &[
            &["2024 Summer Olympics", "61", "FRA", "", "1", "Gold", "True"],
            &["2024 Summer Olympics", "61", "FRA", "", "2", "Gold", "True"],
        ],
    );
    let out = tally(&results, &countries(), &games(), Some("61")).unwrap();
    assert_eq!(out.rows[0][5], "2");
}

#[test]
fn test_header_only_for_empty_results() {
    let out = tally(&RowSet::default(), &countries(), &games(), None).unwrap();
    assert_eq!(out.headers[0], "edition");
    assert_eq!(out.headers[8], "total_medals");
    assert!(out.rows.is_empty());
}

fn medal_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["Gold", "Silver", "Bronze", "", "Participant"])
}

proptest! {
    #[test]
    fn test_prop_totals_and_participation(
        rows in prop::collection::vec(
            (
                prop::sample::select(vec!["60", "61"]),
                prop::sample::select(vec!["FRA", "USA", "KEN"]),
                prop::sample::select(vec!["Relay", "Hockey", "100m"]),
                0u8..20,
                medal_strategy(),
                any::<bool>(),
            ),
            0..60,
        )
    ) {
        let owned: Vec<Vec<String>> = rows
            .iter()
            .map(|(edition_id, noc, event, athlete, medal, team)| {
                vec![
                    String::new(),
                    (*edition_id).to_string(),
                    (*noc).to_string(),
                    (*event).to_string(),
                    athlete.to_string(),
                    (*medal).to_string(),
                    if *team { "True" } else { "False" }.to_string(),
                ]
            })
            .collect();
        let results = RowSet::new(
            RESULT_HEADERS.iter().map(|h| (*h).to_string()).collect(),
            owned,
        );
        let out = tally(&results, &countries(), &games(), Some("61")).unwrap();

        for row in &out.rows {
            let counts: Vec<usize> = row[4..].iter().map(|v| v.parse().unwrap()).collect();
            prop_assert_eq!(counts[4], counts[1] + counts[2] + counts[3]);

            let distinct: HashSet<u8> = rows
                .iter()
                .filter(|(edition_id, noc, ..)| *edition_id == row[1] && *noc == row[3])
                .map(|(_, _, _, athlete, _, _)| *athlete)
                .collect();
            prop_assert_eq!(counts[0], distinct.len());
        }
    }
}
