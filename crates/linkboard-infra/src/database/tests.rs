use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use linkboard_core::domain::{NewPost, Post, VoteDirection};
use linkboard_core::ports::PostRepository;

use crate::database::entity::post;
use crate::database::memory::InMemoryPostRepository;
use crate::database::postgres_repo::PostgresPostRepository;

fn sample_model(id: i64, score: i64) -> post::Model {
    post::Model {
        id,
        title: "Hi".to_owned(),
        url: "http://x".to_owned(),
        owner: "alice".to_owned(),
        score,
        timestamp: 1_700_000_000_000,
    }
}

fn sample_new_post() -> NewPost {
    NewPost::new(
        "Hi".to_string(),
        "http://x".to_string(),
        "alice".to_string(),
    )
    .unwrap()
}

#[tokio::test]
async fn find_post_by_id_maps_row_to_domain() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![sample_model(7, 3)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(7).await.unwrap();

    let found = result.unwrap();
    assert_eq!(found.id, 7);
    assert_eq!(found.title, "Hi");
    assert_eq!(found.score, 3);
}

#[tokio::test]
async fn find_post_by_id_missing_row_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(repo.find_by_id(99).await.unwrap().is_none());
}

#[tokio::test]
async fn adjust_score_reports_rows_affected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert_eq!(repo.adjust_score(7, VoteDirection::Up).await.unwrap(), 1);
    assert_eq!(repo.adjust_score(99, VoteDirection::Down).await.unwrap(), 0);
}

#[tokio::test]
async fn delete_reports_rows_affected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert_eq!(repo.delete(7).await.unwrap(), 1);
}

#[tokio::test]
async fn memory_insert_assigns_sequential_ids_and_zero_score() {
    let repo = InMemoryPostRepository::new();

    let first = repo.insert(sample_new_post()).await.unwrap();
    let second = repo.insert(sample_new_post()).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.score, 0);
}

#[tokio::test]
async fn memory_votes_round_trip_to_original_score() {
    let repo = InMemoryPostRepository::new();
    let post = repo.insert(sample_new_post()).await.unwrap();

    for _ in 0..3 {
        assert_eq!(repo.adjust_score(post.id, VoteDirection::Up).await.unwrap(), 1);
    }
    for _ in 0..3 {
        assert_eq!(
            repo.adjust_score(post.id, VoteDirection::Down).await.unwrap(),
            1
        );
    }

    let current = repo.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(current.score, 0);
}

#[tokio::test]
async fn memory_delete_removes_the_row() {
    let repo = InMemoryPostRepository::new();
    let post = repo.insert(sample_new_post()).await.unwrap();

    assert_eq!(repo.delete(post.id).await.unwrap(), 1);
    assert_eq!(repo.delete(post.id).await.unwrap(), 0);
    assert!(repo.find_by_id(post.id).await.unwrap().is_none());
    assert_eq!(repo.adjust_score(post.id, VoteDirection::Up).await.unwrap(), 0);
}
