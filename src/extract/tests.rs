use super::extract_fields;
use super::jsonld::parse_decimal;

#[test]
fn title_prefers_open_graph_over_document_title() {
    let html = r#"
        <html><head>
            <meta property="og:title" content="A">
            <title>B</title>
        </head><body></body></html>
    "#;
    assert_eq!(extract_fields(html).title, "A");
}

#[test]
fn title_falls_back_to_document_title() {
    let html = "<html><head><title> Plain Title </title></head><body></body></html>";
    assert_eq!(extract_fields(html).title, "Plain Title");
}

#[test]
fn meta_attribute_order_is_irrelevant() {
    let html = r#"
        <html><head>
            <meta content="Reversed" property="og:title">
        </head><body></body></html>
    "#;
    assert_eq!(extract_fields(html).title, "Reversed");
}

#[test]
fn twitter_tags_fill_in_for_missing_open_graph() {
    let html = r#"
        <html><head>
            <meta name="twitter:title" content="Tweet Title">
            <meta name="twitter:description" content="Tweet Description">
            <meta name="twitter:image" content="https://x/t.jpg">
        </head><body></body></html>
    "#;
    let result = extract_fields(html);
    assert_eq!(result.title, "Tweet Title");
    assert_eq!(result.description, "Tweet Description");
    assert_eq!(result.image, "https://x/t.jpg");
}

#[test]
fn description_prefers_open_graph_over_generic_meta() {
    let html = r#"
        <html><head>
            <meta name="description" content="generic">
            <meta property="og:description" content="social">
        </head><body></body></html>
    "#;
    assert_eq!(extract_fields(html).description, "social");
}

#[test]
fn image_fallback_skips_site_chrome() {
    let html = r#"
        <html><body>
            <img src="/assets/logo.png">
            <img src="/assets/favicon-icon.png">
            <img src="https://x/y.jpg">
        </body></html>
    "#;
    assert_eq!(extract_fields(html).image, "https://x/y.jpg");
}

#[test]
fn image_fallback_only_used_when_nothing_else_matched() {
    let html = r#"
        <html><head>
            <meta property="og:image" content="https://x/og.jpg">
        </head><body>
            <img src="https://x/body.jpg">
        </body></html>
    "#;
    assert_eq!(extract_fields(html).image, "https://x/og.jpg");
}

#[test]
fn jsonld_book_supplies_name_author_and_isbn() {
    let html = r#"
        <html><head>
            <script type="application/ld+json">
                {"@type":"Book","name":"Salmi per il Cuore",
                 "author":{"name":"Anna Benedetti"},"isbn":"9781234567890"}
            </script>
        </head><body></body></html>
    "#;
    let result = extract_fields(html);
    assert_eq!(result.title, "Salmi per il Cuore");
    assert_eq!(result.author, "Anna Benedetti");
    assert_eq!(result.isbn, "9781234567890");
}

#[test]
fn jsonld_author_array_takes_first_entry() {
    let html = r#"
        <html><head>
            <script type="application/ld+json">
                {"@type":"Product","name":"X",
                 "author":[{"name":"First Author"},{"name":"Second Author"}]}
            </script>
        </head><body></body></html>
    "#;
    assert_eq!(extract_fields(html).author, "First Author");
}

#[test]
fn jsonld_image_variants_all_resolve() {
    let array = r#"
        <html><head><script type="application/ld+json">
            {"@type":"Product","image":["https://x/1.jpg","https://x/2.jpg"]}
        </script></head><body></body></html>
    "#;
    assert_eq!(extract_fields(array).image, "https://x/1.jpg");

    let object = r#"
        <html><head><script type="application/ld+json">
            {"@type":"Product","image":{"@type":"ImageObject","url":"https://x/obj.jpg"}}
        </script></head><body></body></html>
    "#;
    assert_eq!(extract_fields(object).image, "https://x/obj.jpg");
}

#[test]
fn invalid_jsonld_blocks_are_skipped() {
    let html = r#"
        <html><head>
            <script type="application/ld+json">{not valid json</script>
            <script type="application/ld+json">
                {"@type":"Book","name":"Still Found"}
            </script>
        </head><body></body></html>
    "#;
    assert_eq!(extract_fields(html).title, "Still Found");
}

#[test]
fn jsonld_graph_wrapper_is_flattened() {
    let html = r#"
        <html><head>
            <script type="application/ld+json">
                {"@graph":[{"@type":"WebPage"},{"@type":"Book","name":"Graph Book"}]}
            </script>
        </head><body></body></html>
    "#;
    assert_eq!(extract_fields(html).title, "Graph Book");
}

#[test]
fn unrelated_jsonld_types_are_ignored() {
    let html = r#"
        <html><head>
            <title>Page Title</title>
            <script type="application/ld+json">
                {"@type":"NewsArticle","name":"Not a Product"}
            </script>
        </head><body></body></html>
    "#;
    let result = extract_fields(html);
    assert_eq!(result.title, "Page Title");
    assert!(result.isbn.is_empty());
}

#[test]
fn offer_price_accepts_comma_decimals() {
    let html = r#"
        <html><head>
            <script type="application/ld+json">
                {"@type":"Book","name":"X","offers":{"price":"12,50"}}
            </script>
        </head><body></body></html>
    "#;
    assert_eq!(extract_fields(html).price, Some(12.50));
}

#[test]
fn offer_array_takes_first_offer() {
    let html = r#"
        <html><head>
            <script type="application/ld+json">
                {"@type":"Product","name":"X",
                 "offers":[{"price":10.0},{"price":99.0}]}
            </script>
        </head><body></body></html>
    "#;
    assert_eq!(extract_fields(html).price, Some(10.0));
}

#[test]
fn price_scanned_from_text_when_no_structured_offer() {
    let html = "<html><body><span>€ 18,90</span></body></html>";
    assert_eq!(extract_fields(html).price, Some(18.90));
}

#[test]
fn price_scanned_from_data_attribute() {
    let html = r#"<html><body><div data-price="24.99">Buy</div></body></html>"#;
    assert_eq!(extract_fields(html).price, Some(24.99));
}

#[test]
fn undeterminable_price_is_none() {
    let html = "<html><body><p>no numbers that look like money</p></body></html>";
    assert_eq!(extract_fields(html).price, None);
}

#[test]
fn isbn_meta_beats_structured_data_and_regex() {
    let html = r#"
        <html><head>
            <meta property="og:isbn" content="9780000000001">
            <script type="application/ld+json">
                {"@type":"Book","isbn":"9789999999999"}
            </script>
        </head><body>ISBN: 9781111111111</body></html>
    "#;
    assert_eq!(extract_fields(html).isbn, "9780000000001");
}

#[test]
fn gtin13_fills_in_for_missing_isbn() {
    let html = r#"
        <html><head>
            <script type="application/ld+json">
                {"@type":"Product","gtin13":"4006381333931"}
            </script>
        </head><body></body></html>
    "#;
    assert_eq!(extract_fields(html).isbn, "4006381333931");
}

#[test]
fn labeled_identifier_scanned_from_text() {
    let html = "<html><body><p>ISBN: 978-8817029042</p></body></html>";
    assert_eq!(extract_fields(html).isbn, "978-8817029042");

    let asin = "<html><body><p>ASIN: B00EXAMPLE</p></body></html>";
    assert_eq!(extract_fields(asin).isbn, "B00EXAMPLE");
}

#[test]
fn author_meta_beats_book_tags_and_structured_data() {
    let html = r#"
        <html><head>
            <meta name="author" content="Meta Author">
            <meta property="book:author" content="Book Author">
            <script type="application/ld+json">
                {"@type":"Book","author":"JsonLd Author"}
            </script>
        </head><body></body></html>
    "#;
    assert_eq!(extract_fields(html).author, "Meta Author");
}

#[test]
fn book_author_tag_used_when_plain_author_missing() {
    let html = r#"
        <html><head>
            <meta property="book:author" content="Book Author">
        </head><body></body></html>
    "#;
    assert_eq!(extract_fields(html).author, "Book Author");
}

#[test]
fn empty_document_yields_empty_result() {
    let result = extract_fields("<html><head></head><body></body></html>");
    assert!(result.is_empty());
    assert!(result.error.is_none());
}

#[test]
fn parse_decimal_handles_separator_styles() {
    assert_eq!(parse_decimal("12,50"), Some(12.50));
    assert_eq!(parse_decimal("12.50"), Some(12.50));
    assert_eq!(parse_decimal("1.234,56"), Some(1234.56));
    assert_eq!(parse_decimal("1,234.56"), Some(1234.56));
    assert_eq!(parse_decimal("1,234"), Some(1234.0));
    assert_eq!(parse_decimal("free"), None);
}
