use pagination_engine::{
    PAGINATION, PaginationConfigUpdate, PaginationMeta, PaginationOptions, Paginator,
    QueryOptions, compute_meta, format_response, normalize,
};

use super::*;

/// Page 2 of 100 items holds items 11..=20 with neighbours on both sides.
#[test]
fn paginate_second_page_of_hundred() {
    let paginator = Paginator::default();
    let result = paginator.paginate(&test_items(100), &PaginationOptions::new(2, 10));

    let ids: Vec<u32> = result.data.iter().map(|item| item.id).collect();
    assert_eq!(ids, (11..=20).collect::<Vec<_>>());
    assert_eq!(result.data[0].name, "Item 11");
    assert_eq!(
        result.pagination,
        PaginationMeta {
            page: 2,
            limit: 10,
            total: 100,
            total_pages: 10,
            has_next: true,
            has_prev: true,
            next_page: Some(3),
            prev_page: Some(1),
        }
    );
}

/// The input collection is left untouched and the page is an owned copy.
#[test]
fn paginate_copies_the_slice() {
    let items = test_items(5);
    let result = Paginator::default().paginate(&items, &PaginationOptions::new(1, 2));
    drop(items);
    assert_eq!(result.data.len(), 2);
    assert_eq!(result.data[1].id, 2);
}

/// A database-backed caller pages with query options, then builds meta from its own count.
#[test]
fn database_style_flow() {
    let paginator = Paginator::new(config(1, 20, 50, 5));
    let rows = test_items(137);
    let request = PaginationOptions::from_query("page=3&limit=25").unwrap();

    let QueryOptions {
        page,
        limit,
        offset,
    } = paginator.query_options(&request);
    assert_eq!((page, limit, offset), (3, 25, 50));

    let fetched: Vec<Item> = rows
        .iter()
        .skip(offset as usize)
        .take(limit as usize)
        .cloned()
        .collect();
    let meta = paginator.create_meta(&request, rows.len() as u64);
    let response = format_response(fetched, meta);

    assert_eq!(response.data.first().map(|i| i.id), Some(51));
    assert_eq!(response.data.last().map(|i| i.id), Some(75));
    assert_eq!(response.pagination.total_pages, 6);
    assert_eq!(response.pagination.next_page, Some(4));
    assert_eq!(
        response,
        paginator.paginate(&rows, &PaginationOptions::new(3, 25))
    );
}

#[test]
fn response_serializes_like_api_payload() {
    let result = Paginator::default().paginate(&[10, 20, 30], &PaginationOptions::new(2, 2));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "data": [30],
            "pagination": {
                "page": 2,
                "limit": 2,
                "total": 3,
                "totalPages": 2,
                "hasNext": false,
                "hasPrev": true,
                "nextPage": null,
                "prevPage": 1,
            }
        })
    );
}

/// Zero means "use the default": this must not turn into a clamp to the minimum.
#[test]
fn zero_page_and_limit_use_defaults() {
    let paginator = Paginator::new(config(2, 30, 100, 5));
    let query = paginator.query_options(&PaginationOptions::new(0, 0));
    assert_eq!(query.page, 2);
    assert_eq!(query.limit, 30);

    let report = paginator.validate(&PaginationOptions::new(0, 0));
    assert!(!report.is_valid);
    assert_eq!(
        report.messages(),
        vec!["Page must be greater than 0", "Limit must be at least 5"]
    );
    assert_eq!(report.normalized.page(), 2);
    assert_eq!(report.normalized.limit(), 30);
}

#[test]
fn links_for_page_two_of_ten() {
    let paginator = Paginator::default();
    let meta = paginator.create_meta(&PaginationOptions::new(2, 10), 100);
    let links = paginator.create_links(
        "https://api.example.com/users",
        &meta,
        [("search", "test"), ("filter", "active")],
    );

    assert!(links.first.contains("page=1"));
    assert!(links.last.contains("page=10"));
    assert!(links.next.as_deref().unwrap().contains("page=3"));
    assert!(links.prev.as_deref().unwrap().contains("page=1"));
    for link in [&links.first, &links.last] {
        assert!(link.contains("search=test"));
        assert!(link.contains("filter=active"));
        assert!(link.contains("limit=10"));
    }
}

#[test]
fn links_serialize_with_nulls() {
    let meta = compute_meta(
        &normalize(&PaginationOptions::new(1, 10), &Default::default()),
        5,
    );
    let links =
        Paginator::default().create_links("/items", &meta, Vec::<(String, String)>::new());
    let json = serde_json::to_value(&links).unwrap();
    assert_eq!(json["first"], "/items?page=1&limit=10");
    assert_eq!(json["last"], "/items?page=1&limit=10");
    assert!(json["next"].is_null());
    assert!(json["prev"].is_null());
}

#[test]
fn config_updates_apply_to_later_calls() {
    let paginator = Paginator::default();
    assert_eq!(paginator.create_meta(&PaginationOptions::with_limit(150), 300).limit, 100);

    paginator.update_config(PaginationConfigUpdate {
        max_limit: Some(200),
        ..Default::default()
    });
    assert_eq!(paginator.create_meta(&PaginationOptions::with_limit(150), 300).limit, 150);
}

#[test]
fn concurrent_updates_are_never_torn() {
    let paginator = Paginator::new(config(1, 10, 10, 10));
    std::thread::scope(|s| {
        s.spawn(|| {
            for i in 0..200u64 {
                let bound = 10 + i % 2;
                paginator.update_config(PaginationConfigUpdate {
                    default_limit: Some(bound),
                    max_limit: Some(bound),
                    min_limit: Some(bound),
                    ..Default::default()
                });
            }
        });
        s.spawn(|| {
            for _ in 0..200 {
                let config = paginator.config();
                assert_eq!(config.min_limit, config.max_limit);
                assert_eq!(config.default_limit, config.max_limit);
            }
        });
    });
}

#[test]
fn shared_instance_uses_defaults() {
    let meta = PAGINATION.create_meta(&PaginationOptions::default(), 42);
    assert_eq!(meta.page, 1);
    assert_eq!(meta.limit, 10);
    assert_eq!(meta.total_pages, 5);
    assert_eq!(PAGINATION.page_numbers(1, meta.total_pages, 3), vec![1, 2, 3]);
}
