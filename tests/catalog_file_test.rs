use anyhow::Result;
use art_catalog::error::CatalogError;
use art_catalog::query::{run_query, ProductQuery, ProductView};
use art_catalog::service::CatalogService;
use art_catalog::storage::InMemoryCatalog;
use serde_json::json;
use std::sync::Arc;
use tempfile::tempdir;

fn write_catalog(dir: &std::path::Path, products: serde_json::Value) -> std::path::PathBuf {
    let path = dir.join("products.json");
    std::fs::write(&path, serde_json::to_vec_pretty(&products).unwrap()).unwrap();
    path
}

#[tokio::test]
async fn file_catalog_feeds_the_service() -> Result<()> {
    let dir = tempdir()?;
    let path = write_catalog(
        dir.path(),
        json!([
            {
                "id": 21, "name": "Harbor at Dusk", "price": 320.0,
                "image": "https://example.com/harbor.jpg", "brand": "Ana Ruiz",
                "company": "landscape", "featured": true,
                "size": ["Digital Art"], "color": ["oil"],
                "description": "Oil on linen"
            },
            {
                "id": 22, "name": "Quiet Room", "price": 95.5,
                "image": "https://example.com/room.jpg", "brand": "Ana Ruiz",
                "company": "still-life",
                "size": ["Face Portraits"], "color": ["ink"]
            }
        ]),
    );

    let catalog = InMemoryCatalog::from_json_file(&path)?;
    assert_eq!(catalog.len(), 2);

    let service = CatalogService::new(Arc::new(catalog));
    let page = service
        .list_products(&ProductQuery::from_params([("featured", "false")]))
        .await?;
    assert_eq!(page.count, 1);
    let ProductView::Full(product) = &page.products[0] else {
        panic!("expected full record");
    };
    assert_eq!(product.id, 22);
    assert_eq!(product.display_price(), "95.50");

    let harbor = service.product(21).await?.expect("product 21");
    assert_eq!(harbor.description.as_deref(), Some("Oil on linen"));
    Ok(())
}

#[test]
fn projection_includes_description_when_present() -> Result<()> {
    let dir = tempdir()?;
    let path = write_catalog(
        dir.path(),
        json!([{
            "id": 1, "name": "Study", "price": 10.0, "image": "i", "brand": "b",
            "company": "abstract", "size": ["Digital Art"], "color": ["ink"],
            "description": "Charcoal"
        }]),
    );
    let catalog = InMemoryCatalog::from_json_file(&path)?;
    let page = run_query(
        catalog.products(),
        &ProductQuery::from_params([("fields", "description")]),
    );
    assert_eq!(serde_json::to_value(&page.products)?, json!([{ "description": "Charcoal" }]));
    Ok(())
}

#[test]
fn duplicate_ids_refuse_to_load() -> Result<()> {
    let dir = tempdir()?;
    let record = json!({
        "id": 3, "name": "Twin", "price": 1.0, "image": "i", "brand": "b",
        "company": "pop", "size": ["Digital Art"], "color": ["ink"]
    });
    let path = write_catalog(dir.path(), json!([record.clone(), record]));
    let err = InMemoryCatalog::from_json_file(&path).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidCatalog(_)));
    Ok(())
}

#[test]
fn malformed_file_is_a_json_error() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("products.json");
    std::fs::write(&path, "[{\"id\": 1,")?;
    let err = InMemoryCatalog::from_json_file(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
    Ok(())
}

#[test]
fn missing_path_falls_back_to_bundled_artworks() -> Result<()> {
    let catalog = InMemoryCatalog::load(None)?;
    assert_eq!(catalog.len(), 12);

    let err = InMemoryCatalog::load(Some(std::path::Path::new("/no/such/catalog.json"))).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
    Ok(())
}
