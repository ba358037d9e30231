use chrono::NaiveDate;
use mushtrace::core::LabelCodec;
use mushtrace::core::aggregate::{Summary, count_by_mushroom_type, count_by_pack_date};
use mushtrace::core::filter::Query;
use mushtrace::errors::AppError;
use mushtrace::models::{Catalog, Catalogs, ShipmentRecord};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn record(mushroom: u32, box_number: u32, restaurant: u32, pack: &str, ship: &str) -> ShipmentRecord {
    ShipmentRecord {
        mushroom_type_id: mushroom,
        box_number,
        restaurant_id: restaurant,
        pack_date: d(pack),
        ship_date: d(ship),
    }
}

fn sample_labels() -> Vec<String> {
    vec![
        "Blue Oyster - 2024-05-01-BOX001 - Restaurant A - Packed: 2024-05-01 - Shipped: 2024-05-02".into(),
        "Lion's Mane - 2024-05-03-BOX002 - Restaurant B - Packed: 2024-05-03 - Shipped: 2024-05-04".into(),
        "Blue Oyster - 2024-05-10-BOX003 - Restaurant C - Packed: 2024-05-10 - Shipped: 2024-05-11".into(),
    ]
}

#[test]
fn encode_builds_the_documented_layout() {
    let catalogs = Catalogs::default();
    let codec = LabelCodec::new(&catalogs);

    let label = codec.encode(&record(1, 7, 1, "2024-05-01", "2024-05-02")).unwrap();
    assert_eq!(
        label,
        "Blue Oyster - 2024-05-01-BOX007 - Restaurant A - Packed: 2024-05-01 - Shipped: 2024-05-02"
    );
}

#[test]
fn large_box_numbers_are_not_truncated() {
    let catalogs = Catalogs::default();
    let label = LabelCodec::new(&catalogs)
        .encode(&record(2, 1234, 3, "2024-06-01", "2024-06-01"))
        .unwrap();

    assert!(label.contains("2024-06-01-BOX1234"));
    assert_eq!(LabelCodec::decode(&label).unwrap().box_number, "1234");
}

#[test]
fn decode_recovers_every_field() {
    let catalogs = Catalogs::default();
    let encoded = LabelCodec::new(&catalogs)
        .encode(&record(2, 42, 2, "2024-05-03", "2024-05-09"))
        .unwrap();

    let label = LabelCodec::decode(&encoded).unwrap();
    assert_eq!(label.mushroom, "Lion's Mane");
    assert_eq!(label.box_number, "042");
    assert_eq!(label.restaurant, "Restaurant B");
    assert_eq!(label.pack_date, d("2024-05-03"));
    assert_eq!(label.ship_date, d("2024-05-09"));
    assert_eq!(label.tracking_number(), "2024-05-03-BOX042");

    assert_eq!(LabelCodec::render(&label), encoded);
}

#[test]
fn unknown_catalog_ids_are_rejected() {
    let catalogs = Catalogs::default();
    let codec = LabelCodec::new(&catalogs);

    let err = codec.encode(&record(99, 1, 1, "2024-05-01", "2024-05-02")).unwrap_err();
    assert!(matches!(err, AppError::InvalidCatalogId { id: 99, .. }));

    let err = codec.encode(&record(1, 1, 42, "2024-05-01", "2024-05-02")).unwrap_err();
    assert!(matches!(err, AppError::InvalidCatalogId { id: 42, .. }));
}

#[test]
fn malformed_labels_fail_to_decode() {
    for bad in [
        "",
        "just some text",
        "Blue Oyster - 2024-05-01-BOX001 - Restaurant A - Packed: 2024-05-01",
        "Blue Oyster - 2024-05-01-001 - Restaurant A - Packed: 2024-05-01 - Shipped: 2024-05-02",
        "Blue Oyster - 2024-05-01-BOX001 - Restaurant A - 2024-05-01 - Shipped: 2024-05-02",
        "Blue Oyster - 2024-05-01-BOX001 - Restaurant A - Packed: 2024-13-01 - Shipped: 2024-05-02",
    ] {
        let err = LabelCodec::decode(bad).unwrap_err();
        assert!(matches!(err, AppError::MalformedLabel { .. }), "accepted: {bad:?}");
    }
}

#[test]
fn catalog_names_with_the_separator_are_rejected() {
    let err = Catalog::new("restaurant", [(1, "Cafe - Downtown")]).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));

    let err = Catalog::new("restaurant", [(1, "   ")]).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn reverse_lookup_reports_every_id() {
    let catalog = Catalog::new("restaurant", [(1, "Bistro"), (2, "Diner"), (7, "Bistro")]).unwrap();

    assert_eq!(catalog.ids_for("Bistro"), vec![1, 7]);
    assert_eq!(catalog.ids_for("Diner"), vec![2]);
    assert!(catalog.ids_for("Cafe").is_empty());
}

#[test]
fn custom_catalogs_drive_encoding() {
    let catalogs = Catalogs::new(
        Catalog::new("mushroom type", [(10, "Shiitake")]).unwrap(),
        Catalog::new("restaurant", [(5, "Bistro")]).unwrap(),
    );
    let label = LabelCodec::new(&catalogs)
        .encode(&record(10, 3, 5, "2024-07-01", "2024-07-02"))
        .unwrap();

    assert!(label.starts_with("Shiitake - 2024-07-01-BOX003 - Bistro"));
    assert!(matches!(
        LabelCodec::new(&catalogs).encode(&record(1, 3, 5, "2024-07-01", "2024-07-02")),
        Err(AppError::InvalidCatalogId { kind: "mushroom type", id: 1 })
    ));
}

#[test]
fn record_parse_validates_form_fields() {
    assert!(ShipmentRecord::parse("1", "7", "1", "2024-05-01", "2024-05-02").is_ok());
    assert!(matches!(
        ShipmentRecord::parse("x", "7", "1", "2024-05-01", "2024-05-02"),
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        ShipmentRecord::parse("1", "-3", "1", "2024-05-01", "2024-05-02"),
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        ShipmentRecord::parse("1", "7", "1", "2024/05/01", "2024-05-02"),
        Err(AppError::InvalidDate(_))
    ));
    assert!(matches!(
        ShipmentRecord::parse("1", "7", "1", "2024-05-01", "2024-5-2"),
        Err(AppError::InvalidDate(_))
    ));
}

#[test]
fn text_filter_is_case_insensitive_and_keeps_positions() {
    let labels = sample_labels();

    let hits = Query::parse("lion's mane", None, None).unwrap().apply(&labels);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].position, 1);
    assert_eq!(hits[0].label, labels[1]);

    let hits = Query::parse("BLUE", None, None).unwrap().apply(&labels);
    let positions: Vec<usize> = hits.iter().map(|h| h.position).collect();
    assert_eq!(positions, vec![0, 2]);
}

#[test]
fn empty_query_returns_everything_in_order() {
    let labels = sample_labels();
    let query = Query::parse("", Some(""), Some("  ")).unwrap();

    assert!(query.is_empty());
    assert_eq!(query.apply(&labels).len(), labels.len());
}

#[test]
fn date_range_is_inclusive_on_pack_date() {
    let labels = sample_labels();

    let hits = Query::parse("", Some("2024-05-02"), Some("2024-05-10"))
        .unwrap()
        .apply(&labels);
    let positions: Vec<usize> = hits.iter().map(|h| h.position).collect();
    assert_eq!(positions, vec![1, 2]);

    let hits = Query::parse("", None, Some("2024-05-01")).unwrap().apply(&labels);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].position, 0);
}

#[test]
fn filter_and_range_combine() {
    let labels = sample_labels();
    let hits = Query::parse("blue oyster", Some("2024-05-05"), None)
        .unwrap()
        .apply(&labels);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].position, 2);
}

#[test]
fn bad_range_bounds_are_rejected() {
    assert!(matches!(
        Query::parse("", Some("05/01/2024"), None),
        Err(AppError::InvalidDate(_))
    ));
}

#[test]
fn undecodable_labels_never_match() {
    let mut labels = sample_labels();
    labels.push("Blue Oyster scribble".into());

    let hits = Query::parse("blue", None, None).unwrap().apply(&labels);
    assert_eq!(hits.len(), 2);
}

#[test]
fn counts_per_mushroom_type_and_pack_date() {
    let labels = sample_labels();

    let by_type = count_by_mushroom_type(&labels);
    assert_eq!(by_type.get("Blue Oyster"), Some(&2));
    assert_eq!(by_type.get("Lion's Mane"), Some(&1));

    let by_date = count_by_pack_date(&labels);
    let dates: Vec<NaiveDate> = by_date.keys().copied().collect();
    assert_eq!(dates, vec![d("2024-05-01"), d("2024-05-03"), d("2024-05-10")]);
    assert!(by_date.values().all(|c| *c == 1));
}

#[test]
fn summary_skips_malformed_entries() {
    let mut labels = sample_labels();
    labels.push("garbage".into());

    let summary = Summary::build(&labels);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.by_mushroom.values().sum::<usize>(), 3);
    assert_eq!(summary.by_pack_date.values().sum::<usize>(), 3);
}

#[test]
fn summary_of_nothing_is_empty() {
    let summary = Summary::build::<String>(&[]);
    assert_eq!(summary, Summary::default());
}

#[test]
fn range_filter_only_needs_a_valid_pack_date() {
    let labels = vec![
        "Blue Oyster - 2024-06-01-BOX001 - Restaurant A - Packed: 2024-06-01 - Shipped: soon".to_string(),
        "Blue Oyster - 2024-06-02-BOXabc - Restaurant A - Packed: 2024-06-02 - Shipped: 2024-06-03".to_string(),
        "Blue Oyster - 2024-06-03-BOX003 - Restaurant A - Packed: June 3rd - Shipped: 2024-06-04".to_string(),
    ];

    assert_eq!(LabelCodec::pack_date(&labels[0]).unwrap(), d("2024-06-01"));
    assert!(LabelCodec::decode(&labels[0]).is_err());

    let hits = Query::parse("", Some("2024-06-01"), Some("2024-06-30"))
        .unwrap()
        .apply(&labels);
    let positions: Vec<usize> = hits.iter().map(|h| h.position).collect();
    assert_eq!(positions, vec![0, 1]);

    let hits = Query::parse("soon", None, None).unwrap().apply(&labels);
    assert_eq!(hits.len(), 1);
}

#[test]
fn pack_date_still_requires_five_segments() {
    assert!(LabelCodec::pack_date("Packed: 2024-06-01").is_err());
    assert!(LabelCodec::pack_date("a - b - c - Packed: 2024-06-01").is_err());
}
