use crate::fixture::{
    sheets_chart_request, slide_requests, textbox_requests, PresentationFixture,
    DEFAULT_SLIDE_LAYOUT, TEST_TEXTBOX_ID, TEST_TEXTBOX_TEXT,
};
use dotenv::dotenv;
use std::collections::HashSet;
use std::env;

#[test]
fn slide_requests_generates_count_distinct_ids() {
    for count in [0, 1, 5] {
        let (slide_ids, requests) = slide_requests(count, DEFAULT_SLIDE_LAYOUT);
        assert_eq!(slide_ids.len(), count);
        assert_eq!(requests.len(), count);

        let distinct: HashSet<_> = slide_ids.iter().collect();
        assert_eq!(distinct.len(), count);
    }
}

#[test]
fn slide_requests_reference_the_given_layout() {
    let (slide_ids, requests) = slide_requests(3, "TITLE_AND_TWO_COLUMNS");
    assert_eq!(slide_ids, vec!["slide_0", "slide_1", "slide_2"]);

    for (slide_id, request) in slide_ids.iter().zip(&requests) {
        let create_slide = request.create_slide.as_ref().unwrap();
        assert_eq!(create_slide.object_id.as_deref(), Some(slide_id.as_str()));
        assert_eq!(
            create_slide
                .slide_layout_reference
                .as_ref()
                .unwrap()
                .predefined_layout
                .as_deref(),
            Some("TITLE_AND_TWO_COLUMNS")
        );
    }
}

#[test]
fn textbox_requests_insert_into_the_created_shape() {
    let requests = textbox_requests(TEST_TEXTBOX_ID, "page_1");
    assert_eq!(requests.len(), 2);

    let create_shape = requests[0].create_shape.as_ref().unwrap();
    assert_eq!(create_shape.object_id.as_deref(), Some(TEST_TEXTBOX_ID));
    assert_eq!(create_shape.shape_type.as_deref(), Some("TEXT_BOX"));

    let properties = create_shape.element_properties.as_ref().unwrap();
    assert_eq!(properties.page_object_id.as_deref(), Some("page_1"));
    let height = properties.size.as_ref().unwrap().height.as_ref().unwrap();
    assert_eq!(height.magnitude, Some(350.0));
    assert_eq!(height.unit.as_deref(), Some("PT"));

    let insert_text = requests[1].insert_text.as_ref().unwrap();
    assert_eq!(insert_text.object_id.as_deref(), Some(TEST_TEXTBOX_ID));
    assert_eq!(insert_text.insertion_index, Some(0));
    assert_eq!(insert_text.text.as_deref(), Some(TEST_TEXTBOX_TEXT));
}

#[test]
fn sheets_chart_request_links_the_source_chart() {
    let request = sheets_chart_request("MyChart_01", "page_1", "sheet_abc", 42);

    let create_chart = request.create_sheets_chart.as_ref().unwrap();
    assert_eq!(create_chart.object_id.as_deref(), Some("MyChart_01"));
    assert_eq!(create_chart.spreadsheet_id.as_deref(), Some("sheet_abc"));
    assert_eq!(create_chart.chart_id, Some(42));
    assert_eq!(create_chart.linking_mode.as_deref(), Some("LINKED"));

    let properties = create_chart.element_properties.as_ref().unwrap();
    assert_eq!(properties.page_object_id.as_deref(), Some("page_1"));
    let width = properties.size.as_ref().unwrap().width.as_ref().unwrap();
    assert_eq!(width.magnitude, Some(4_000_000.0));
    assert_eq!(width.unit.as_deref(), Some("EMU"));
}

#[test]
fn delete_on_cleanup_keeps_registration_order() {
    let mut fixture = PresentationFixture::connect("test-token");
    assert!(fixture.pending_cleanups().is_empty());

    fixture.delete_on_cleanup("file_a");
    fixture.delete_on_cleanup("file_b");
    // Duplicate registration just queues a second delete attempt.
    fixture.delete_on_cleanup("file_a");

    assert_eq!(fixture.pending_cleanups(), ["file_a", "file_b", "file_a"]);
}

#[tokio::test]
#[ignore = "requires GOOGLE_ACCESS_TOKEN with Drive scope"]
async fn cleanup_attempts_every_entry() -> anyhow::Result<()> {
    dotenv().ok();
    let access_token = env::var("GOOGLE_ACCESS_TOKEN")?;

    let mut fixture = PresentationFixture::connect(&access_token);
    let presentation_id = fixture.create_test_presentation().await?;
    // Unknown ids fail to delete; the real presentation must still get its
    // attempt afterwards.
    fixture.delete_on_cleanup("missing_file_1");
    fixture.delete_on_cleanup("missing_file_2");
    fixture.delete_on_cleanup(&presentation_id);

    fixture.cleanup().await;
    assert!(fixture.pending_cleanups().is_empty());

    Ok(())
}

#[tokio::test]
#[ignore = "requires GOOGLE_ACCESS_TOKEN with Drive scope"]
async fn presentation_lifecycle() -> anyhow::Result<()> {
    dotenv().ok();
    let access_token = env::var("GOOGLE_ACCESS_TOKEN")?;

    let mut fixture = PresentationFixture::connect(&access_token);

    let presentation_id = fixture.create_test_presentation().await?;
    assert_eq!(fixture.pending_cleanups(), [presentation_id.as_str()]);

    let slide_ids = fixture
        .add_slides(&presentation_id, 3, DEFAULT_SLIDE_LAYOUT)
        .await?;
    assert_eq!(slide_ids, vec!["slide_0", "slide_1", "slide_2"]);

    let box_id = fixture
        .create_test_textbox(&presentation_id, &slide_ids[0])
        .await?;
    assert_eq!(box_id, TEST_TEXTBOX_ID);

    fixture.cleanup().await;

    Ok(())
}
