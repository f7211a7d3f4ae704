use movie_catalog_core::{LookupKind, MovieForm};
use movie_catalog_db::*;
use tempfile::TempDir;

fn form(title: &str) -> MovieForm {
    MovieForm {
        title: title.to_string(),
        director: "Christopher Nolan".to_string(),
        release_year: "2010".to_string(),
        genre: "Sci-Fi".to_string(),
        duration: "148".to_string(),
        rating: "8.8".to_string(),
        language: "English".to_string(),
        country: "UK".to_string(),
        description: "A thief who steals corporate secrets through dreams.".to_string(),
    }
}

fn movie_count(catalog: &Catalog) -> i64 {
    catalog.stats().unwrap().movies
}

#[test]
fn open_seeds_and_loads_registry() {
    let catalog = Catalog::open_memory().unwrap();
    assert_eq!(catalog.seeded().total(), 12);
    for kind in LookupKind::ALL {
        assert_eq!(catalog.registry().len(kind), 3);
    }
}

#[test]
fn add_movie_then_list_shows_resolved_names() {
    let mut catalog = Catalog::open_memory().unwrap();
    let id = catalog.add_movie(&form("Inception")).unwrap();

    let movies = catalog.movies(None).unwrap();
    assert_eq!(movies.len(), 1);
    let row = &movies[0];
    assert_eq!(row.id, id);
    assert_eq!(row.director.as_deref(), Some("Christopher Nolan"));
    assert_eq!(row.genre.as_deref(), Some("Sci-Fi"));
    assert_eq!(row.language.as_deref(), Some("English"));
    assert_eq!(row.country.as_deref(), Some("UK"));
    assert_eq!(row.duration, Some(148));
    assert_eq!(row.rating, Some(8.8));
}

#[test]
fn add_movie_creates_new_lookup_entries() {
    let mut catalog = Catalog::open_memory().unwrap();
    let mut input = form("Dune");
    input.director = "Denis Villeneuve".to_string();
    input.country = "Canada".to_string();

    catalog.add_movie(&input).unwrap();

    assert!(catalog
        .registry()
        .contains(LookupKind::Director, "Denis Villeneuve"));
    assert!(catalog.registry().contains(LookupKind::Country, "Canada"));
    assert_eq!(catalog.registry().len(LookupKind::Genre), 3);
}

#[test]
fn blank_lookup_fields_are_null() {
    let mut catalog = Catalog::open_memory().unwrap();
    let input = MovieForm {
        title: "Untitled".to_string(),
        release_year: "2024".to_string(),
        ..Default::default()
    };
    let id = catalog.add_movie(&input).unwrap();

    let row = catalog.movie(id).unwrap();
    assert_eq!(row.director, None);
    assert_eq!(row.genre, None);
    assert_eq!(row.duration, None);
    assert_eq!(row.rating, None);
    assert_eq!(row.description, None);
    for kind in LookupKind::ALL {
        assert_eq!(catalog.registry().len(kind), 3);
    }
}

#[test]
fn invalid_form_never_touches_store() {
    let mut catalog = Catalog::open_memory().unwrap();
    let mut input = form("Tenet");
    input.director = "Someone New".to_string();
    input.rating = "11".to_string();

    let err = catalog.add_movie(&input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRating);
    assert_eq!(movie_count(&catalog), 0);
    // Lookup resolution happens after validation, so nothing was created.
    assert!(!catalog
        .registry()
        .contains(LookupKind::Director, "Someone New"));
}

#[test]
fn validation_reports_first_failure() {
    let mut catalog = Catalog::open_memory().unwrap();

    let mut input = form("");
    input.release_year = "abc".to_string();
    assert_eq!(
        catalog.add_movie(&input).unwrap_err().kind(),
        ErrorKind::Required
    );

    let mut input = form("X");
    input.release_year = "abc".to_string();
    assert_eq!(
        catalog.add_movie(&input).unwrap_err().kind(),
        ErrorKind::NotNumeric
    );
}

#[test]
fn insert_update_filter_round_trip() {
    let mut catalog = Catalog::open_memory().unwrap();
    let input = form("Interstellar");
    let id = catalog.add_movie(&input).unwrap();
    catalog.edit_movie(id, &input).unwrap();

    let movies = catalog.movies(Some("Interstellar")).unwrap();
    assert_eq!(movies.len(), 1);
    // The row converts back to the same form it was written from.
    assert_eq!(MovieForm::from(&movies[0]), input);
}

#[test]
fn edit_prefilled_form_changes_one_field() {
    let mut catalog = Catalog::open_memory().unwrap();
    let id = catalog.add_movie(&form("Memento")).unwrap();

    let mut input = MovieForm::from(&catalog.movie(id).unwrap());
    input.release_year = "2000".to_string();
    catalog.edit_movie(id, &input).unwrap();

    let row = catalog.movie(id).unwrap();
    assert_eq!(row.release_year, Some(2000));
    assert_eq!(row.director.as_deref(), Some("Christopher Nolan"));
}

#[test]
fn edit_missing_movie_is_not_found() {
    let mut catalog = Catalog::open_memory().unwrap();
    let err = catalog.edit_movie(999_999, &form("Ghost")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn edit_missing_movie_creates_no_entries() {
    let mut catalog = Catalog::open_memory().unwrap();
    let before = catalog.stats().unwrap();
    let registry_before = catalog.registry().clone();

    let mut ghost = form("Ghost");
    ghost.director = "Ghost Director".to_string();
    ghost.genre = "Ghost Story".to_string();
    ghost.language = "Ghostish".to_string();
    ghost.country = "Nowhere".to_string();
    let err = catalog.edit_movie(999_999, &ghost).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    assert_eq!(catalog.stats().unwrap(), before);
    assert_eq!(catalog.registry(), &registry_before);
    assert!(
        find_lookup_id(catalog.connection(), LookupKind::Director, "Ghost Director")
            .unwrap()
            .is_none()
    );
}

#[test]
fn remove_movie_frees_lookup_entry() {
    let mut catalog = Catalog::open_memory().unwrap();
    let id = catalog.add_movie(&form("Dunkirk")).unwrap();

    let err = catalog
        .delete_entry(LookupKind::Country, "UK")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InUse);
    assert!(catalog.registry().contains(LookupKind::Country, "UK"));

    catalog.remove_movie(id).unwrap();
    catalog.delete_entry(LookupKind::Country, "UK").unwrap();
    assert!(!catalog.registry().contains(LookupKind::Country, "UK"));

    let err = catalog.remove_movie(id).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn add_entry_twice() {
    let mut catalog = Catalog::open_memory().unwrap();
    catalog.add_entry(LookupKind::Genre, "Western").unwrap();
    let err = catalog.add_entry(LookupKind::Genre, "Western").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateName);
    assert_eq!(catalog.registry().len(LookupKind::Genre), 4);
}

#[test]
fn registry_matches_store_after_mutations() {
    let mut catalog = Catalog::open_memory().unwrap();
    catalog.add_entry(LookupKind::Language, "French").unwrap();
    catalog.delete_entry(LookupKind::Language, "Russian").unwrap();
    let mut input = form("Amélie");
    input.language = "French".to_string();
    input.country = "France".to_string();
    catalog.add_movie(&input).unwrap();

    for kind in LookupKind::ALL {
        let stored: Vec<String> = list_lookup_entries(catalog.connection(), kind)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(catalog.registry().names(kind), stored.as_slice(), "{kind}");
    }
}

#[test]
fn lazy_query_through_session() {
    let mut catalog = Catalog::open_memory().unwrap();
    catalog.add_movie(&form("Inception")).unwrap();
    catalog.add_movie(&form("Insomnia")).unwrap();

    let mut query = catalog.query(Some("in")).unwrap();
    let first = query.rows().unwrap().next().unwrap().unwrap();
    assert_eq!(first.title, "Inception");
}

#[test]
fn unopenable_store_is_unavailable() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("missing").join("dir").join("movies.db");
    let err = Catalog::open(&path).err().expect("open should fail");
    assert_eq!(err.kind(), ErrorKind::StoreUnavailable);
}

#[test]
fn file_store_survives_reopen() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("movies.db");

    let id = {
        let mut catalog = Catalog::open(&path).unwrap();
        catalog.add_movie(&form("The Prestige")).unwrap()
    };

    let catalog = Catalog::open(&path).unwrap();
    assert_eq!(catalog.seeded().total(), 0);
    assert_eq!(catalog.movie(id).unwrap().title, "The Prestige");
}
