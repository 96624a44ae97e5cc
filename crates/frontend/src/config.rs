//! Locations of the externally hosted services this app links to or embeds.
//!
//! Two deployment variants exist: the default points at the publicly hosted
//! Streamlit apps, the `local-services` feature points at locally running
//! instances on ports 8501/8502.

/// Hosted exploratory-data-analysis app (Streamlit).
#[cfg(not(feature = "local-services"))]
pub const EDA_APP_URL: &str =
    "https://pradeepkumar35-advanced-sales-performance-analysi-srcapp-k9vgz6.streamlit.app/";

/// Hosted sales-forecasting app (Streamlit).
#[cfg(not(feature = "local-services"))]
pub const FORECAST_APP_URL: &str =
    "https://pradeepkumar35-advanced-sales-perfo-srcsales-forecasting-n18vd8.streamlit.app/";

#[cfg(feature = "local-services")]
pub const EDA_APP_URL: &str = "http://localhost:8501";

#[cfg(feature = "local-services")]
pub const FORECAST_APP_URL: &str = "http://localhost:8502";

/// Where the upload screen hands the browser off to. The file itself is never
/// transmitted; the EDA service has its own uploader.
pub const UPLOAD_SERVICE_URL: &str = EDA_APP_URL;

/// Target of the inline frame on the `/eda` screen.
pub const EDA_EMBED_URL: &str = EDA_APP_URL;

/// Tableau Public workbook/view rendered on `/tableau`.
pub const TABLEAU_VIZ_NAME: &str = "Finalproject1tableau/Dashboard2";
