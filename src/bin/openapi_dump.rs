//! Print the OpenAPI document as JSON.

use devfolio_backend::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<(), serde_json::Error> {
    println!("{}", ApiDoc::openapi().to_json()?);
    Ok(())
}
