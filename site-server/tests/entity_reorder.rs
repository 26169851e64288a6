//! Store-level tests for the orderable entity collections.
//!
//! Runs against an in-memory SQLite database with the real migrations.

use shared::models::{FaqItemCreate, TestimonialCreate, TestimonialUpdate};
use site_server::db::DbService;
use site_server::db::repository::{RepoError, faq_item, testimonial};
use sqlx::SqlitePool;

async fn test_pool() -> SqlitePool {
    DbService::new_in_memory().await.unwrap().pool
}

fn sample(author: &str) -> TestimonialCreate {
    TestimonialCreate {
        author_name: author.to_string(),
        author_title: None,
        quote: format!("Quote from {author}"),
        rating: Some(5),
        avatar_url: None,
        sort_order: None,
    }
}

#[tokio::test]
async fn create_assigns_dense_default_order() {
    let pool = test_pool().await;

    let a = testimonial::create(&pool, sample("Ana")).await.unwrap();
    let b = testimonial::create(&pool, sample("Bruno")).await.unwrap();
    let c = testimonial::create(&pool, sample("Carla")).await.unwrap();

    assert_eq!(a.sort_order, 0);
    assert_eq!(b.sort_order, 1);
    assert_eq!(c.sort_order, 2);
}

#[tokio::test]
async fn drag_last_to_front_rewrites_every_rank() {
    let pool = test_pool().await;

    let item0 = testimonial::create(&pool, sample("Ana")).await.unwrap();
    let item1 = testimonial::create(&pool, sample("Bruno")).await.unwrap();
    let item2 = testimonial::create(&pool, sample("Carla")).await.unwrap();

    // Drag the item at index 2 to index 0
    testimonial::reorder(&pool, &[item2.id, item0.id, item1.id])
        .await
        .unwrap();

    let rows = testimonial::find_active(&pool).await.unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![item2.id, item0.id, item1.id]);

    // Every entry got its new positional rank
    assert_eq!(rows[0].sort_order, 0);
    assert_eq!(rows[1].sort_order, 1);
    assert_eq!(rows[2].sort_order, 2);
}

#[tokio::test]
async fn reorder_preserves_id_set() {
    let pool = test_pool().await;

    let mut ids = Vec::new();
    for name in ["Ana", "Bruno", "Carla", "Diana"] {
        ids.push(testimonial::create(&pool, sample(name)).await.unwrap().id);
    }

    // An arbitrary permutation
    let permuted = vec![ids[2], ids[0], ids[3], ids[1]];
    testimonial::reorder(&pool, &permuted).await.unwrap();

    let rows = testimonial::find_all(&pool).await.unwrap();
    let mut after: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(after, permuted);

    after.sort_unstable();
    let mut before = ids.clone();
    before.sort_unstable();
    assert_eq!(after, before);

    for (index, row) in rows.iter().enumerate() {
        assert_eq!(row.sort_order, index as i64);
    }
}

#[tokio::test]
async fn reorder_with_unknown_id_rolls_back() {
    let pool = test_pool().await;

    let a = testimonial::create(&pool, sample("Ana")).await.unwrap();
    let b = testimonial::create(&pool, sample("Bruno")).await.unwrap();

    let err = testimonial::reorder(&pool, &[b.id, 9999, a.id])
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    // Nothing moved — the failed batch never became visible
    let rows = testimonial::find_all(&pool).await.unwrap();
    assert_eq!(rows[0].id, a.id);
    assert_eq!(rows[1].id, b.id);
    assert_eq!(rows[0].sort_order, 0);
    assert_eq!(rows[1].sort_order, 1);
}

#[tokio::test]
async fn active_filter_never_leaks_inactive_rows() {
    let pool = test_pool().await;

    let a = testimonial::create(&pool, sample("Ana")).await.unwrap();
    let b = testimonial::create(&pool, sample("Bruno")).await.unwrap();
    let c = testimonial::create(&pool, sample("Carla")).await.unwrap();

    testimonial::update(
        &pool,
        b.id,
        TestimonialUpdate {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let active = testimonial::find_active(&pool).await.unwrap();
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|r| r.is_active));
    assert!(!active.iter().any(|r| r.id == b.id));

    // Admin view still sees everything
    let all = testimonial::find_all(&pool).await.unwrap();
    assert_eq!(all.len(), 3);

    // Reactivate and it comes back, in rank position
    testimonial::update(
        &pool,
        b.id,
        TestimonialUpdate {
            is_active: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let active = testimonial::find_active(&pool).await.unwrap();
    assert_eq!(
        active.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![a.id, b.id, c.id]
    );
}

#[tokio::test]
async fn delete_leaves_order_gaps_and_reads_still_sort() {
    let pool = test_pool().await;

    let a = testimonial::create(&pool, sample("Ana")).await.unwrap();
    let b = testimonial::create(&pool, sample("Bruno")).await.unwrap();
    let c = testimonial::create(&pool, sample("Carla")).await.unwrap();

    assert!(testimonial::delete(&pool, b.id).await.unwrap());
    // Deleting again reports false, not an error
    assert!(!testimonial::delete(&pool, b.id).await.unwrap());

    // No re-compaction: ranks 0 and 2 remain, reads sort over the gap
    let rows = testimonial::find_active(&pool).await.unwrap();
    assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![a.id, c.id]);
    assert_eq!(rows[0].sort_order, 0);
    assert_eq!(rows[1].sort_order, 2);

    // A new entry lands at the current collection length
    let d = testimonial::create(&pool, sample("Diana")).await.unwrap();
    assert_eq!(d.sort_order, 2);
}

#[tokio::test]
async fn update_of_missing_row_reports_not_found() {
    let pool = test_pool().await;

    let err = testimonial::update(&pool, 42, TestimonialUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn reorder_is_uniform_across_entities() {
    let pool = test_pool().await;

    let mut ids = Vec::new();
    for i in 0..3 {
        let item = faq_item::create(
            &pool,
            FaqItemCreate {
                question: format!("Question {i}?"),
                answer: "Answer.".to_string(),
                sort_order: None,
            },
        )
        .await
        .unwrap();
        ids.push(item.id);
    }

    faq_item::reorder(&pool, &[ids[2], ids[0], ids[1]]).await.unwrap();

    let rows = faq_item::find_active(&pool).await.unwrap();
    assert_eq!(
        rows.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![ids[2], ids[0], ids[1]]
    );
}
