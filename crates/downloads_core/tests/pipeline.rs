use downloads_core::{
    compare_items, extract_facets, filter_items, matches_filters, normalize_all, page_window,
    paginate, render, sort_items, Filters, Item, ItemId, PageLink, RawRecord, SortDirection,
    SortField, SortSpec, ViewState, ALL,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn items(values: Vec<Value>) -> Vec<Item> {
    let records: Vec<RawRecord> = values
        .into_iter()
        .map(|value| value.as_object().cloned().expect("object"))
        .collect();
    normalize_all(&records)
}

fn ids(items: &[&Item]) -> Vec<ItemId> {
    items.iter().map(|item| item.id.clone()).collect()
}

fn numbered(ids: &[i64]) -> Vec<ItemId> {
    ids.iter().copied().map(ItemId::Number).collect()
}

fn catalogue() -> Vec<Item> {
    items(vec![
        json!({ "id": 1, "name": "Installation Guide", "filetype": "pdf",
                "product-category": "Windows", "primary-download-category": "Manuals" }),
        json!({ "id": 2, "name": "Door Brochure", "filetype": "pdf",
                "product-category": "Doors", "relatedProductCategories": ["Windows"],
                "filename": "brochure-guide.pdf" }),
        json!({ "id": 3, "name": "Window CAD", "filetype": "dwg",
                "product-category": "Windows", "primary-download-category": "CAD" }),
        json!({ "id": 4, "name": "Skylight Model", "filetype": "skp",
                "relatedDownloadCategories": ["CAD", "BIM"] }),
        json!({ "id": 5, "name": "Care guide", "filetype": "dwg" }),
    ])
}

#[test]
fn facets_are_deduplicated_and_sorted() {
    let facets = extract_facets(&catalogue());

    assert_eq!(facets.product_categories, vec!["Doors", "Windows"]);
    assert_eq!(facets.download_categories, vec!["BIM", "CAD", "Manuals"]);
    assert_eq!(facets.file_types, vec!["DWG", "PDF", "SKP"]);
}

#[test]
fn facets_of_empty_collection_are_empty() {
    let facets = extract_facets(&[]);
    assert!(facets.product_categories.is_empty());
    assert!(facets.download_categories.is_empty());
    assert!(facets.file_types.is_empty());
}

#[test]
fn default_filters_keep_everything_in_order() {
    let all = catalogue();
    let kept = filter_items(&all, &Filters::default());
    assert_eq!(ids(&kept), numbered(&[1, 2, 3, 4, 5]));
}

#[test]
fn search_matches_name_or_filename_case_insensitively() {
    let all = catalogue();
    let filters = Filters {
        search_query: "GUIDE".into(),
        ..Filters::default()
    };
    assert_eq!(ids(&filter_items(&all, &filters)), numbered(&[1, 2, 5]));
}

#[test]
fn product_category_matches_primary_or_related() {
    let all = catalogue();
    let filters = Filters {
        product_category: "Windows".into(),
        ..Filters::default()
    };
    assert_eq!(ids(&filter_items(&all, &filters)), numbered(&[1, 2, 3]));
}

#[test]
fn download_category_matches_primary_or_related() {
    let all = catalogue();
    let filters = Filters {
        download_category: "CAD".into(),
        ..Filters::default()
    };
    assert_eq!(ids(&filter_items(&all, &filters)), numbered(&[3, 4]));
}

#[test]
fn file_type_then_search_are_combined() {
    let all = catalogue();
    let filters = Filters {
        search_query: "guide".into(),
        file_type: "PDF".into(),
        ..Filters::default()
    };
    let kept = filter_items(&all, &filters);
    assert_eq!(ids(&kept), numbered(&[1, 2]));
    assert!(kept.iter().all(|item| matches_filters(item, &filters)));
    assert!(!matches_filters(&all[4], &filters));
}

#[test]
fn unknown_filter_value_yields_empty_result() {
    let all = catalogue();
    let filters = Filters {
        product_category: "Garages".into(),
        file_type: ALL.into(),
        ..Filters::default()
    };
    assert!(filter_items(&all, &filters).is_empty());
}

#[test]
fn missing_sort_leaves_order_untouched() {
    let all = catalogue();
    let mut visible: Vec<&Item> = all.iter().rev().collect();
    sort_items(&mut visible, None);
    assert_eq!(ids(&visible), numbered(&[5, 4, 3, 2, 1]));
}

#[test]
fn ties_keep_prior_order_in_both_directions() {
    let all = catalogue();

    let mut asc: Vec<&Item> = all.iter().collect();
    sort_items(&mut asc, Some(SortSpec::asc(SortField::FileType)));
    assert_eq!(ids(&asc), numbered(&[3, 5, 1, 2, 4]));

    let mut desc: Vec<&Item> = all.iter().collect();
    sort_items(
        &mut desc,
        Some(SortSpec {
            field: SortField::FileType,
            direction: SortDirection::Desc,
        }),
    );
    assert_eq!(ids(&desc), numbered(&[4, 1, 2, 3, 5]));
}

#[test]
fn missing_category_sorts_as_empty_string() {
    let all = catalogue();
    let mut visible: Vec<&Item> = all.iter().collect();
    sort_items(
        &mut visible,
        Some(SortSpec::asc(SortField::PrimaryDownloadCategory)),
    );
    assert_eq!(ids(&visible), numbered(&[2, 4, 5, 3, 1]));
}

#[test]
fn filesize_labels_compare_as_strings() {
    let all = items(vec![
        json!({ "id": 1, "filesize": "50 KB" }),
        json!({ "id": 2, "filesize": "100 KB" }),
    ]);
    let mut visible: Vec<&Item> = all.iter().collect();
    sort_items(&mut visible, Some(SortSpec::asc(SortField::Filesize)));
    assert_eq!(ids(&visible), numbered(&[2, 1]));
}

#[test]
fn filesize_byte_counts_compare_numerically() {
    let all = items(vec![
        json!({ "id": 1, "filesize": 900 }),
        json!({ "id": 2, "filesize": 10000 }),
        json!({ "id": 3, "filesize": 50 }),
    ]);
    let mut visible: Vec<&Item> = all.iter().collect();
    sort_items(&mut visible, Some(SortSpec::asc(SortField::Filesize)));
    assert_eq!(ids(&visible), numbered(&[3, 1, 2]));
}

#[test]
fn name_sort_is_plain_lexicographic() {
    let all = catalogue();
    let mut visible: Vec<&Item> = all.iter().collect();
    sort_items(&mut visible, Some(SortSpec::asc(SortField::Name)));
    assert_eq!(ids(&visible), numbered(&[5, 2, 1, 4, 3]));
}

#[test]
fn twenty_three_items_make_three_pages() {
    let all: Vec<u32> = (1..=23).collect();

    let first = paginate(&all, 1, 10);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items, (1..=10).collect::<Vec<_>>());

    let last = paginate(&all, 3, 10);
    assert_eq!(last.items, vec![21, 22, 23]);

    let beyond = paginate(&all, 4, 10);
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total_pages, 3);

    assert!(paginate(&all, 0, 10).items.is_empty());
}

#[test]
fn pages_concatenate_back_to_the_input() {
    for len in [0usize, 1, 9, 10, 11, 30] {
        let all: Vec<usize> = (0..len).collect();
        let total = paginate(&all, 1, 10).total_pages;
        let rebuilt: Vec<usize> = (1..=total)
            .flat_map(|page| {
                let page = paginate(&all, page, 10);
                assert!(page.items.len() <= 10);
                page.items
            })
            .collect();
        assert_eq!(rebuilt, all);
    }
}

#[test]
fn empty_collection_has_no_pages() {
    let empty: Vec<u32> = Vec::new();
    assert_eq!(paginate(&empty, 1, 10).total_pages, 0);
}

#[test]
fn small_page_counts_list_every_page() {
    assert_eq!(
        page_window(2, 5),
        (1..=5).map(PageLink::Page).collect::<Vec<_>>()
    );
    assert!(page_window(1, 0).is_empty());
}

#[test]
fn large_page_counts_collapse_with_ellipses() {
    use PageLink::{Ellipsis, Page};

    assert_eq!(
        page_window(5, 10),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
    );
    assert_eq!(page_window(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
    assert_eq!(page_window(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
}

fn mixed_sizes() -> Vec<Item> {
    items(
        (0..30i64)
            .map(|i| match i % 4 {
                0 => json!({ "id": i, "filesize": (i * 37) % 100 + 1 }),
                1 => json!({ "id": i, "filesize": format!("{} KB", (i * 13) % 50) }),
                2 => json!({ "id": i, "filesize": 0 }),
                _ => json!({ "id": i }),
            })
            .collect(),
    )
}

// Zero and missing sizes lead, then byte counts numerically, then labels as strings.
fn expected_filesize_order(all: &[Item]) -> Vec<ItemId> {
    use downloads_core::FileSize;

    let mut empty = Vec::new();
    let mut numbers = Vec::new();
    let mut labels = Vec::new();
    for item in all {
        match &item.filesize {
            Some(FileSize::Bytes(n)) if *n > 0 => numbers.push((*n, item.id.clone())),
            Some(FileSize::Text(label)) => labels.push((label.clone(), item.id.clone())),
            _ => empty.push(item.id.clone()),
        }
    }
    numbers.sort_by(|a, b| a.0.cmp(&b.0));
    labels.sort_by(|a, b| a.0.cmp(&b.0));
    empty
        .into_iter()
        .chain(numbers.into_iter().map(|(_, id)| id))
        .chain(labels.into_iter().map(|(_, id)| id))
        .collect()
}

#[test]
fn mixed_byte_counts_and_labels_sort_consistently() {
    let all = mixed_sizes();
    let expected = expected_filesize_order(&all);

    let mut asc: Vec<&Item> = all.iter().collect();
    sort_items(&mut asc, Some(SortSpec::asc(SortField::Filesize)));
    assert_eq!(ids(&asc), expected);

    let mut desc: Vec<&Item> = all.iter().collect();
    sort_items(
        &mut desc,
        Some(SortSpec {
            field: SortField::Filesize,
            direction: SortDirection::Desc,
        }),
    );
    for pair in desc.windows(2) {
        assert_ne!(
            compare_items(pair[0], pair[1], SortSpec::asc(SortField::Filesize)),
            std::cmp::Ordering::Less
        );
    }
    assert_eq!(desc.len(), all.len());
}

#[test]
fn zero_byte_size_ties_with_missing_size() {
    let all = items(vec![
        json!({ "id": 1, "filesize": 0 }),
        json!({ "id": 2 }),
        json!({ "id": 3, "filesize": 0 }),
        json!({ "id": 4, "filesize": 5 }),
    ]);
    let mut desc: Vec<&Item> = all.iter().collect();
    sort_items(
        &mut desc,
        Some(SortSpec {
            field: SortField::Filesize,
            direction: SortDirection::Desc,
        }),
    );
    assert_eq!(ids(&desc), numbered(&[4, 1, 2, 3]));
}

#[test]
fn far_out_of_range_page_renders_empty() {
    let records: Vec<RawRecord> = (1..=100)
        .map(|i| json!({ "id": i }).as_object().cloned().expect("object"))
        .collect();
    let view = render(
        &records,
        &ViewState {
            page: usize::MAX,
            ..ViewState::default()
        },
    );

    assert!(view.items.is_empty());
    assert_eq!(view.total_pages, 10);
    assert_eq!(view.page_links, vec![PageLink::Page(1), PageLink::Page(10)]);
    assert_eq!(
        page_window(usize::MAX - 1, 10),
        vec![PageLink::Page(1), PageLink::Page(10)]
    );
}

#[test]
fn sort_field_names_parse_back() {
    for field in [
        SortField::Name,
        SortField::Filesize,
        SortField::FileType,
        SortField::PrimaryDownloadCategory,
    ] {
        assert_eq!(field.to_string().parse::<SortField>(), Ok(field));
    }
    assert!("size".parse::<SortField>().is_err());
}
