use google_chat1::HangoutsChat;
use google_drive3::DriveHub;
use google_sheets4::Sheets;
use google_slides1::Slides;

pub type SlidesClient = Slides<
    google_slides1::hyper_rustls::HttpsConnector<
        google_slides1::hyper_util::client::legacy::connect::HttpConnector,
    >,
>;

pub type DriveClient = DriveHub<
    google_drive3::hyper_rustls::HttpsConnector<
        google_drive3::hyper_util::client::legacy::connect::HttpConnector,
    >,
>;

pub type SheetsClient = Sheets<
    google_sheets4::hyper_rustls::HttpsConnector<
        google_sheets4::hyper_util::client::legacy::connect::HttpConnector,
    >,
>;

pub type ChatClient = HangoutsChat<
    google_chat1::hyper_rustls::HttpsConnector<
        google_chat1::hyper_util::client::legacy::connect::HttpConnector,
    >,
>;

pub fn get_slides_client(access_token: &str) -> SlidesClient {
    let hub = Slides::new(
        google_slides1::hyper_util::client::legacy::Client::builder(
            google_slides1::hyper_util::rt::TokioExecutor::new(),
        )
        .build(
            google_slides1::hyper_rustls::HttpsConnectorBuilder::new()
                .with_native_roots()
                .unwrap()
                .https_or_http()
                .enable_http1()
                .build(),
        ),
        access_token.to_string(),
    );
    hub
}

pub fn get_drive_client(access_token: &str) -> DriveClient {
    let hub = DriveHub::new(
        google_drive3::hyper_util::client::legacy::Client::builder(
            google_drive3::hyper_util::rt::TokioExecutor::new(),
        )
        .build(
            google_drive3::hyper_rustls::HttpsConnectorBuilder::new()
                .with_native_roots()
                .unwrap()
                .https_or_http()
                .enable_http1()
                .build(),
        ),
        access_token.to_string(),
    );
    hub
}

pub fn get_sheets_client(access_token: &str) -> SheetsClient {
    let hub = Sheets::new(
        google_sheets4::hyper_util::client::legacy::Client::builder(
            google_sheets4::hyper_util::rt::TokioExecutor::new(),
        )
        .build(
            google_sheets4::hyper_rustls::HttpsConnectorBuilder::new()
                .with_native_roots()
                .unwrap()
                .https_or_http()
                .enable_http1()
                .build(),
        ),
        access_token.to_string(),
    );
    hub
}

pub fn get_chat_client(access_token: &str) -> ChatClient {
    let hub = HangoutsChat::new(
        google_chat1::hyper_util::client::legacy::Client::builder(
            google_chat1::hyper_util::rt::TokioExecutor::new(),
        )
        .build(
            google_chat1::hyper_rustls::HttpsConnectorBuilder::new()
                .with_native_roots()
                .unwrap()
                .https_or_http()
                .enable_http1()
                .build(),
        ),
        access_token.to_string(),
    );
    hub
}
