use storage::repository::HighScoreRepository;
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_round_trips_the_best_score() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_high_score?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.load_high_score().await.expect("load"), None);

    repo.store_high_score(6).await.expect("store");
    assert_eq!(repo.load_high_score().await.expect("load"), Some(6));
}

#[tokio::test]
async fn sqlite_overwrites_on_repeated_store() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.store_high_score(3).await.expect("store");
    repo.store_high_score(8).await.expect("store");
    assert_eq!(repo.load_high_score().await.expect("load"), Some(8));
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    repo.store_high_score(1).await.expect("store");
    assert_eq!(repo.load_high_score().await.expect("load"), Some(1));
}
