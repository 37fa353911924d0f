/// Quote listing tests - filter composition and pagination
///
/// Tests cover:
/// - AND composition of independent criteria
/// - Case-insensitive search and language matching
/// - Pagination windows and clamping
/// - Eager-loaded relations on every result
mod utils;

use quotedb::{InMemoryQuoteRepository, QuoteFilter, QuoteRepository, PAGE_SIZE};
use utils::factories::QuoteFactory;

async fn seeded_repo() -> InMemoryQuoteRepository {
    let repo = InMemoryQuoteRepository::new();
    let en = repo.add_language("EN");
    let pt = repo.add_language("PT-BR");
    let wisdom = repo.add_tag("wisdom");
    let wit = repo.add_tag("wit");

    repo.save(
        &QuoteFactory::new()
            .id(1)
            .author("William Shakespeare")
            .created_on(1_000)
            .translation(&en, "To be or not to be")
            .tag(&wisdom)
            .build(),
    )
    .await
    .unwrap();

    repo.save(
        &QuoteFactory::new()
            .id(2)
            .author("Oscar Wilde")
            .created_on(2_000)
            .valid(true)
            .translation(&en, "Be yourself; everyone else is already taken")
            .tag(&wit)
            .build(),
    )
    .await
    .unwrap();

    repo.save(
        &QuoteFactory::new()
            .id(3)
            .author("Machado de Assis")
            .created_on(3_000)
            .translation(&pt, "Ha pessoas que choram por saber que as rosas tem espinho")
            .build(),
    )
    .await
    .unwrap();

    repo
}

fn ids(quotes: &[quotedb::Quote]) -> Vec<i32> {
    quotes.iter().map(|q| q.id).collect()
}

#[tokio::test]
async fn list_without_criteria_returns_everything_newest_first() {
    let repo = seeded_repo().await;

    let all = repo.get_all(&QuoteFilter::new()).await.unwrap();
    assert_eq!(ids(&all), vec![3, 2, 1]);
}

#[tokio::test]
async fn search_matches_author_case_insensitively() {
    let repo = seeded_repo().await;

    let lower = repo
        .get_all(&QuoteFilter::new().with_search("shakespeare"))
        .await
        .unwrap();
    let upper = repo
        .get_all(&QuoteFilter::new().with_search("SHAKESPEARE"))
        .await
        .unwrap();

    assert_eq!(ids(&lower), vec![1]);
    assert_eq!(ids(&lower), ids(&upper));
}

#[tokio::test]
async fn search_matches_translated_message_text() {
    let repo = seeded_repo().await;

    let found = repo
        .get_all(&QuoteFilter::new().with_search("already TAKEN"))
        .await
        .unwrap();
    assert_eq!(ids(&found), vec![2]);
}

#[tokio::test]
async fn language_filter_is_case_insensitive() {
    let repo = seeded_repo().await;

    let found = repo
        .get_all(&QuoteFilter::new().with_language("pt-br"))
        .await
        .unwrap();
    assert_eq!(ids(&found), vec![3]);
}

#[tokio::test]
async fn valid_filter_matches_flag_exactly() {
    let repo = seeded_repo().await;

    let valid = repo
        .get_all(&QuoteFilter::new().with_valid(true))
        .await
        .unwrap();
    let invalid = repo
        .get_all(&QuoteFilter::new().with_valid(false))
        .await
        .unwrap();

    assert_eq!(ids(&valid), vec![2]);
    assert_eq!(ids(&invalid), vec![3, 1]);
}

#[tokio::test]
async fn tag_filter_matches_any_listed_tag() {
    let repo = seeded_repo().await;

    let found = repo
        .get_all(&QuoteFilter::new().with_tags(vec![1, 99]))
        .await
        .unwrap();
    assert_eq!(ids(&found), vec![1]);
}

#[tokio::test]
async fn id_filter_keeps_only_listed_ids() {
    let repo = seeded_repo().await;

    let found = repo
        .get_all(&QuoteFilter::new().with_ids(vec![1, 3]))
        .await
        .unwrap();
    assert_eq!(ids(&found), vec![3, 1]);
}

#[tokio::test]
async fn combined_criteria_equal_intersection_of_individual_results() {
    let repo = seeded_repo().await;

    let by_search = repo
        .get_all(&QuoteFilter::new().with_search("be"))
        .await
        .unwrap();
    let by_valid = repo
        .get_all(&QuoteFilter::new().with_valid(true))
        .await
        .unwrap();
    let combined = repo
        .get_all(&QuoteFilter::new().with_search("be").with_valid(true))
        .await
        .unwrap();

    let expected: Vec<i32> = ids(&by_search)
        .into_iter()
        .filter(|id| ids(&by_valid).contains(id))
        .collect();
    assert_eq!(ids(&combined), expected);
    assert_eq!(ids(&combined), vec![2]);
}

#[tokio::test]
async fn language_and_tag_criteria_compose() {
    let repo = seeded_repo().await;

    let found = repo
        .get_all(&QuoteFilter::new().with_language("en").with_tags(vec![2]))
        .await
        .unwrap();
    assert_eq!(ids(&found), vec![2]);
}

#[tokio::test]
async fn empty_filter_lists_are_ignored() {
    let repo = seeded_repo().await;

    let found = repo
        .get_all(&QuoteFilter::new().with_tags(Vec::new()).with_ids(Vec::new()))
        .await
        .unwrap();
    assert_eq!(found.len(), 3);
}

#[tokio::test]
async fn page_zero_and_page_one_are_identical() {
    let repo = InMemoryQuoteRepository::new();
    let en = repo.add_language("EN");
    for i in 1..=10 {
        repo.save(
            &QuoteFactory::new()
                .id(i)
                .created_on(i as i64 * 100)
                .translation(&en, "Message")
                .build(),
        )
        .await
        .unwrap();
    }

    let page_zero = repo
        .get_all(&QuoteFilter::new().with_page(0))
        .await
        .unwrap();
    let page_one = repo
        .get_all(&QuoteFilter::new().with_page(1))
        .await
        .unwrap();

    assert_eq!(page_zero.len(), PAGE_SIZE);
    assert_eq!(ids(&page_zero), ids(&page_one));
}

#[tokio::test]
async fn second_page_returns_the_remainder() {
    let repo = InMemoryQuoteRepository::new();
    let en = repo.add_language("EN");
    for i in 1..=10 {
        repo.save(
            &QuoteFactory::new()
                .id(i)
                .created_on(i as i64 * 100)
                .translation(&en, "Message")
                .build(),
        )
        .await
        .unwrap();
    }

    let second = repo
        .get_all(&QuoteFilter::new().with_page(2))
        .await
        .unwrap();
    // Newest first: page 1 holds ids 10..5, page 2 the remaining 4.
    assert_eq!(ids(&second), vec![4, 3, 2, 1]);
}

#[tokio::test]
async fn absent_page_returns_the_full_filtered_set() {
    let repo = InMemoryQuoteRepository::new();
    let en = repo.add_language("EN");
    for i in 1..=10 {
        repo.save(
            &QuoteFactory::new()
                .id(i)
                .created_on(i as i64 * 100)
                .translation(&en, "Message")
                .build(),
        )
        .await
        .unwrap();
    }

    let all = repo.get_all(&QuoteFilter::new()).await.unwrap();
    assert_eq!(all.len(), 10);
}

#[tokio::test]
async fn listed_quotes_carry_translations_and_tags() {
    let repo = seeded_repo().await;

    let all = repo.get_all(&QuoteFilter::new()).await.unwrap();
    let shakespeare = all.iter().find(|q| q.id == 1).unwrap();

    assert_eq!(shakespeare.translations.len(), 1);
    assert_eq!(shakespeare.translations[0].language.code, "EN");
    assert_eq!(shakespeare.translations[0].message, "To be or not to be");
    assert_eq!(shakespeare.tags.len(), 1);
    assert_eq!(shakespeare.tags[0].name, "wisdom");
}

#[tokio::test]
async fn empty_result_is_not_an_error() {
    let repo = seeded_repo().await;

    let found = repo
        .get_all(&QuoteFilter::new().with_search("no such text anywhere"))
        .await
        .unwrap();
    assert!(found.is_empty());
}
