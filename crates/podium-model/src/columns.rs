//! Fixed column names consumed by the reconciliation stages.
//!
//! Stages never infer a column's meaning from its position; every lookup goes
//! through one of these names.

/// Primary athlete biography table.
pub mod athlete {
    pub const TABLE: &str = "athlete_bio";
    pub const ID: &str = "athlete_id";
    pub const NAME: &str = "name";
    pub const SEX: &str = "sex";
    pub const BORN: &str = "born";
    pub const NOC: &str = "country_noc";
    pub const HEIGHT: &str = "height";
    pub const WEIGHT: &str = "weight";
    pub const COUNTRY: &str = "country";
}

/// Primary event result table.
pub mod result {
    pub const TABLE: &str = "event_results";
    pub const EDITION: &str = "edition";
    pub const EDITION_ID: &str = "edition_id";
    pub const NOC: &str = "country_noc";
    pub const SPORT: &str = "sport";
    pub const EVENT: &str = "event";
    pub const RESULT_ID: &str = "result_id";
    pub const ATHLETE: &str = "athlete";
    pub const ATHLETE_ID: &str = "athlete_id";
    pub const POS: &str = "pos";
    pub const MEDAL: &str = "medal";
    pub const TEAM: &str = "isTeamSport";
    pub const AGE: &str = "age";
}

/// Games edition table.
pub mod games {
    pub const TABLE: &str = "games";
    pub const EDITION: &str = "edition";
    pub const EDITION_ID: &str = "edition_id";
    pub const YEAR: &str = "year";
    pub const CITY: &str = "city";
    pub const START_DATE: &str = "start_date";
    pub const END_DATE: &str = "end_date";
    pub const COMPETITION_DATE: &str = "competition_date";
}

/// Country lookup table.
pub mod country {
    pub const TABLE: &str = "countries";
    pub const NOC: &str = "noc";
    pub const COUNTRY: &str = "country";
}

/// Medal tally output.
pub mod tally {
    pub const HEADER: [&str; 9] = [
        "edition",
        "edition_id",
        "Country",
        "NOC",
        "number_of_athletes",
        "gold_medal_count",
        "silver_medal_count",
        "bronze_medal_count",
        "total_medals",
    ];
}

/// Tables published by the secondary source for the target edition.
pub mod secondary {
    pub mod athletes {
        pub const TABLE: &str = "secondary_athletes";
        pub const CODE: &str = "code";
        pub const NAME: &str = "name";
        pub const NAME_TV: &str = "name_tv";
        pub const GENDER: &str = "gender";
        pub const COUNTRY_CODE: &str = "country_code";
        pub const COUNTRY: &str = "country";
        pub const BIRTH_DATE: &str = "birth_date";
        pub const EVENTS: &str = "events";
        pub const HEIGHT: &str = "height";
        pub const WEIGHT: &str = "weight";
    }

    pub mod events {
        pub const TABLE: &str = "secondary_events";
        pub const EVENT: &str = "event";
        pub const SPORT: &str = "sport";
    }

    pub mod medallists {
        pub const TABLE: &str = "secondary_medallists";
        pub const CODE_ATHLETE: &str = "code_athlete";
        pub const MEDAL_TYPE: &str = "medal_type";
        pub const EVENT: &str = "event";
        pub const CODE_TEAM: &str = "code_team";
        pub const NAME: &str = "name";
        pub const GENDER: &str = "gender";
        pub const COUNTRY_CODE: &str = "country_code";
    }

    pub mod teams {
        pub const TABLE: &str = "secondary_teams";
        pub const TEAM: &str = "team";
        pub const COUNTRY_CODE: &str = "country_code";
        pub const DISCIPLINE: &str = "discipline";
        pub const EVENTS: &str = "events";
        pub const ATHLETES: &str = "athletes";
        pub const ATHLETES_CODES: &str = "athletes_codes";
    }

    pub mod nocs {
        pub const TABLE: &str = "secondary_nocs";
        pub const CODE: &str = "code";
        pub const COUNTRY: &str = "country";
    }
}
