//! GraphQL documents sent to AniList.

pub const STAFF_SUMMARY_QUERY: &str = r#"
query ($id: Int) {
  Staff(id: $id) {
    id
    name {
      full
      native
    }
    primaryOccupations
  }
}
"#;

pub const STAFF_PROFILE_QUERY: &str = r#"
query ($id: Int) {
  Staff(id: $id) {
    id
    name {
      full
      native
    }
    homeTown
    image {
      large
    }
    dateOfBirth {
      year
      month
      day
    }
    dateOfDeath {
      year
      month
      day
    }
    age
    primaryOccupations
    characters(sort: FAVOURITES_DESC, page: 1, perPage: 15) {
      nodes {
        id
        name {
          full
        }
        image {
          medium
        }
      }
    }
  }
}
"#;

pub const STAFF_PAGE_QUERY: &str = r#"
query ($page: Int, $perPage: Int) {
  Page(page: $page, perPage: $perPage) {
    staff(sort: FAVOURITES_DESC) {
      id
      name {
        full
        native
      }
      image {
        large
      }
      primaryOccupations
      favourites
    }
  }
}
"#;
