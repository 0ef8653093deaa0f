use google_slides1::api::{
    AffineTransform, BatchUpdatePresentationRequest, CreateShapeRequest, CreateSheetsChartRequest,
    CreateSlideRequest, Dimension, InsertTextRequest, LayoutReference, PageElementProperties,
    Presentation, Request, Size,
};
use tracing::{debug, error};

use crate::client::{
    get_drive_client, get_sheets_client, get_slides_client, DriveClient, SheetsClient,
    SlidesClient,
};
use crate::WorkspaceError;

pub const DRIVE_SCOPE: &str = "https://www.googleapis.com/auth/drive";

pub const TEST_PRESENTATION_TITLE: &str = "Test Preso";
pub const DEFAULT_SLIDE_LAYOUT: &str = "TITLE_AND_TWO_COLUMNS";
pub const TEST_TEXTBOX_ID: &str = "MyTextBox_01";
pub const TEST_TEXTBOX_TEXT: &str = "New Box Text Inserted";
pub const TEST_CHART_ID: &str = "MyChart_01";

/// Test-lifecycle helper for Slides integration tests.
///
/// Holds one client per target service, built once from a single access token
/// and read-only afterwards, plus a per-test list of Drive file ids to delete
/// on teardown. The clients may be shared across the tests of a suite; the
/// cleanup list belongs to one test and is drained by [`cleanup`].
///
/// [`cleanup`]: PresentationFixture::cleanup
pub struct PresentationFixture {
    pub slides: SlidesClient,
    pub drive: DriveClient,
    pub sheets: SheetsClient,
    files_to_delete: Vec<String>,
}

impl PresentationFixture {
    /// Builds the Slides, Drive and Sheets clients from an access token
    /// carrying [`DRIVE_SCOPE`]. No remote call is made until a helper runs.
    pub fn connect(access_token: &str) -> Self {
        Self {
            slides: get_slides_client(access_token),
            drive: get_drive_client(access_token),
            sheets: get_sheets_client(access_token),
            files_to_delete: Vec::new(),
        }
    }

    /// Registers a Drive file id for deletion during [`cleanup`]. Registering
    /// the same id twice just causes a second, harmless delete attempt.
    ///
    /// [`cleanup`]: PresentationFixture::cleanup
    pub fn delete_on_cleanup(&mut self, file_id: &str) {
        self.files_to_delete.push(file_id.to_string());
    }

    pub fn pending_cleanups(&self) -> &[String] {
        &self.files_to_delete
    }

    /// Creates a presentation titled "Test Preso", registers it for cleanup
    /// and returns its id.
    pub async fn create_test_presentation(&mut self) -> Result<String, WorkspaceError> {
        let body = Presentation {
            title: Some(TEST_PRESENTATION_TITLE.to_string()),
            ..Default::default()
        };

        let (_, presentation) = self
            .slides
            .presentations()
            .create(body)
            .doit()
            .await
            .map_err(|e| WorkspaceError::GoogleApi(e.to_string()))?;

        let presentation_id = presentation
            .presentation_id
            .ok_or_else(|| WorkspaceError::GoogleApi("create returned no presentationId".into()))?;
        self.delete_on_cleanup(&presentation_id);
        Ok(presentation_id)
    }

    /// Appends `count` slides with the given predefined layout in a single
    /// batched update and returns their generated ids in order. The slides are
    /// not registered for cleanup: deleting the presentation removes them.
    pub async fn add_slides(
        &mut self,
        presentation_id: &str,
        count: usize,
        layout: &str,
    ) -> Result<Vec<String>, WorkspaceError> {
        let (slide_ids, requests) = slide_requests(count, layout);

        let body = BatchUpdatePresentationRequest {
            requests: Some(requests),
            ..Default::default()
        };
        self.slides
            .presentations()
            .batch_update(body, presentation_id)
            .doit()
            .await
            .map_err(|e| WorkspaceError::GoogleApi(e.to_string()))?;

        Ok(slide_ids)
    }

    /// Creates a 350x350 PT text box on the given page and inserts a line of
    /// text into it, as one two-operation batch. Returns the shape id echoed
    /// by the first reply.
    pub async fn create_test_textbox(
        &mut self,
        presentation_id: &str,
        page_id: &str,
    ) -> Result<String, WorkspaceError> {
        let body = BatchUpdatePresentationRequest {
            requests: Some(textbox_requests(TEST_TEXTBOX_ID, page_id)),
            ..Default::default()
        };

        let (_, response) = self
            .slides
            .presentations()
            .batch_update(body, presentation_id)
            .doit()
            .await
            .map_err(|e| WorkspaceError::GoogleApi(e.to_string()))?;

        response
            .replies
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|reply| reply.create_shape)
            .and_then(|shape| shape.object_id)
            .ok_or_else(|| WorkspaceError::GoogleApi("batch reply carried no shape id".into()))
    }

    /// Embeds a chart from an existing spreadsheet onto the given page, linked
    /// so it follows the source data. Returns the created element's id.
    pub async fn create_test_sheets_chart(
        &mut self,
        presentation_id: &str,
        page_id: &str,
        spreadsheet_id: &str,
        sheet_chart_id: i32,
    ) -> Result<String, WorkspaceError> {
        let body = BatchUpdatePresentationRequest {
            requests: Some(vec![sheets_chart_request(
                TEST_CHART_ID,
                page_id,
                spreadsheet_id,
                sheet_chart_id,
            )]),
            ..Default::default()
        };

        let (_, response) = self
            .slides
            .presentations()
            .batch_update(body, presentation_id)
            .doit()
            .await
            .map_err(|e| WorkspaceError::GoogleApi(e.to_string()))?;

        response
            .replies
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|reply| reply.create_sheets_chart)
            .and_then(|chart| chart.object_id)
            .ok_or_else(|| WorkspaceError::GoogleApi("batch reply carried no chart id".into()))
    }

    /// Drains the cleanup list in insertion order, attempting each deletion
    /// exactly once. A failed delete (already gone, permission lost) is logged
    /// and skipped so the remaining entries still get their attempt; cleanup
    /// never fails the test.
    pub async fn cleanup(&mut self) {
        for file_id in self.files_to_delete.drain(..) {
            debug!("Deleting test file {file_id}");
            if let Err(e) = self.drive.files().delete(&file_id).doit().await {
                error!("Unable to delete file {file_id}: {e}");
            }
        }
    }
}

/// Builds `count` createSlide operations with deterministic ids
/// (`slide_0`, `slide_1`, ...), all referencing the same predefined layout.
pub fn slide_requests(count: usize, layout: &str) -> (Vec<String>, Vec<Request>) {
    let mut slide_ids = Vec::with_capacity(count);
    let mut requests = Vec::with_capacity(count);
    for i in 0..count {
        let slide_id = format!("slide_{i}");
        requests.push(Request {
            create_slide: Some(CreateSlideRequest {
                object_id: Some(slide_id.clone()),
                slide_layout_reference: Some(LayoutReference {
                    predefined_layout: Some(layout.to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        });
        slide_ids.push(slide_id);
    }
    (slide_ids, requests)
}

/// Builds the createShape + insertText pair for a fixed-size text box. Both
/// operations target the same object id so the insert lands in the new shape.
pub fn textbox_requests(box_id: &str, page_id: &str) -> Vec<Request> {
    let pt350 = Dimension {
        magnitude: Some(350.0),
        unit: Some("PT".to_string()),
    };

    vec![
        Request {
            create_shape: Some(CreateShapeRequest {
                object_id: Some(box_id.to_string()),
                shape_type: Some("TEXT_BOX".to_string()),
                element_properties: Some(PageElementProperties {
                    page_object_id: Some(page_id.to_string()),
                    size: Some(Size {
                        height: Some(pt350.clone()),
                        width: Some(pt350),
                    }),
                    transform: Some(AffineTransform {
                        scale_x: Some(1.0),
                        scale_y: Some(1.0),
                        translate_x: Some(350.0),
                        translate_y: Some(100.0),
                        unit: Some("PT".to_string()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        },
        Request {
            insert_text: Some(InsertTextRequest {
                object_id: Some(box_id.to_string()),
                insertion_index: Some(0),
                text: Some(TEST_TEXTBOX_TEXT.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        },
    ]
}

/// Builds a single createSheetsChart operation embedding chart
/// `sheet_chart_id` from `spreadsheet_id`, linked to the source spreadsheet.
pub fn sheets_chart_request(
    object_id: &str,
    page_id: &str,
    spreadsheet_id: &str,
    sheet_chart_id: i32,
) -> Request {
    let emu4m = Dimension {
        magnitude: Some(4_000_000.0),
        unit: Some("EMU".to_string()),
    };

    Request {
        create_sheets_chart: Some(CreateSheetsChartRequest {
            object_id: Some(object_id.to_string()),
            spreadsheet_id: Some(spreadsheet_id.to_string()),
            chart_id: Some(sheet_chart_id),
            linking_mode: Some("LINKED".to_string()),
            element_properties: Some(PageElementProperties {
                page_object_id: Some(page_id.to_string()),
                size: Some(Size {
                    height: Some(emu4m.clone()),
                    width: Some(emu4m),
                }),
                transform: Some(AffineTransform {
                    scale_x: Some(1.0),
                    scale_y: Some(1.0),
                    translate_x: Some(100_000.0),
                    translate_y: Some(100_000.0),
                    unit: Some("EMU".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}
