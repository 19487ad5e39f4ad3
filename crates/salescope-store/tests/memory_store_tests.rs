//! Integration tests for the in-memory transaction store

use salescope::{Transaction, TransactionFilter, TransactionQuery};
use salescope_store::{MemoryTransactionStore, TransactionStore};
use time::Month;
use time::macros::datetime;

async fn seeded_store() -> MemoryTransactionStore {
    let store = MemoryTransactionStore::new();

    let mut records: Vec<Transaction> = (0..23)
        .map(|i| {
            Transaction::new(format!("Cotton Shirt #{i}"), datetime!(2022-03-10 10:00 UTC))
                .with_price(20.0 + i as f64)
                .with_sold(i % 2 == 0)
                .with_source_id(i)
        })
        .collect();
    records.push(
        Transaction::new("Laptop", datetime!(2022-04-02 10:00 UTC))
            .with_description("Comes with a free shirt bag")
            .with_price(900.0)
            .with_source_id(100),
    );
    records.push(
        Transaction::new("Phone", datetime!(2022-03-03 10:00 UTC))
            .with_price(25.0)
            .with_source_id(101),
    );

    store.insert_many(records).await.unwrap();
    store
}

#[tokio::test]
async fn test_paging_through_search_results() {
    let store = seeded_store().await;

    let query = TransactionQuery::from_params(Some("Cotton Shirt"), None, Some("2"));
    let page = store.find(&query.filter(), Some(query.window())).await.unwrap();
    let total = store.count(&query.filter()).await.unwrap();
    let pagination = query.pagination(total);

    assert_eq!(total, 23);
    assert_eq!(page.len(), 10);
    assert_eq!(pagination.current_page, 2);
    assert_eq!(pagination.total_pages, 3);
    assert_eq!(pagination.per_page, 10);

    let last = TransactionQuery::from_params(Some("Cotton Shirt"), None, Some("3"));
    let tail = store.find(&last.filter(), Some(last.window())).await.unwrap();
    assert_eq!(tail.len(), 3);

    let beyond = TransactionQuery::from_params(Some("Cotton Shirt"), None, Some("9"));
    assert!(store.find(&beyond.filter(), Some(beyond.window())).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_matches_description_and_price() {
    let store = seeded_store().await;

    let query = TransactionQuery::from_params(Some("SHIRT"), None, None);
    assert_eq!(store.count(&query.filter()).await.unwrap(), 24);

    // 25 is the phone's price and also shirt #5's price
    let query = TransactionQuery::from_params(Some("25"), None, None);
    let found = store.find(&query.filter(), None).await.unwrap();
    let titles: Vec<_> = found.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Cotton Shirt #5", "Phone"]);
}

#[tokio::test]
async fn test_month_slices_partition_by_sold_flag() {
    let store = seeded_store().await;
    let march = TransactionFilter::for_month(Month::March);

    let sold = store.count(&march.clone().sold(true)).await.unwrap();
    let unsold = store.count(&march.clone().sold(false)).await.unwrap();
    let all = store.count(&march).await.unwrap();

    assert_eq!(sold + unsold, all);
    assert_eq!(all, 24);
}

#[tokio::test]
async fn test_unknown_month_lists_everything() {
    let store = seeded_store().await;
    let query = TransactionQuery::from_params(None, Some("Smarch"), None);
    assert_eq!(store.count(&query.filter()).await.unwrap(), 25);
}
