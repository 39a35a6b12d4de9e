use mealroll_db::{SqliteCatalogue, import};
use mealroll_shared::{Catalogue, Error};
use mealroll_shared::mealplan::{Exclusions, Filter, Filters};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_meal_names_sorted() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    import(&pool, &helpers::document()).await?;

    let catalogue = SqliteCatalogue::new(pool);
    assert_eq!(
        catalogue.meal_names().await?,
        vec!["Beef Chilli", "Pesto Pasta", "Tofu Stir Fry", "Veg Curry"]
    );

    Ok(())
}

#[tokio::test]
async fn test_find_candidate_applies_filters_and_exclusions() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    import(&pool, &helpers::document()).await?;
    let catalogue = SqliteCatalogue::new(pool);

    let vegan_quick = Filters::new([Filter::Vegan, Filter::Quick]);
    for _ in 0..10 {
        let meal = catalogue
            .find_candidate(&vegan_quick, &Exclusions::default())
            .await?
            .expect("a vegan quick meal exists");
        assert_eq!(meal.name, "Tofu Stir Fry");
        assert_eq!(meal.category, "Stir Fry");
        assert!(meal.is_vegan && meal.is_quick);
    }

    let veggie = Filters::new([Filter::Veggie]);
    let mut exclusions = Exclusions::default();
    exclusions.categories.insert("Curry".to_owned());
    exclusions.categories.insert("Stir Fry".to_owned());
    for _ in 0..10 {
        let meal = catalogue.find_candidate(&veggie, &exclusions).await?;
        assert_eq!(meal.map(|m| m.name), Some("Pesto Pasta".to_owned()));
    }

    let pasta = catalogue.meal_by_name("Pesto Pasta").await?.unwrap();
    exclusions.meal_ids.insert(pasta.id);
    assert!(catalogue.find_candidate(&veggie, &exclusions).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_meal_by_name_and_ingredients() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    import(&pool, &helpers::document()).await?;
    let catalogue = SqliteCatalogue::new(pool);

    assert!(catalogue.meal_by_name("Toad in the Hole").await?.is_none());

    let curry = catalogue.meal_by_name("Veg Curry").await?.unwrap();
    assert_eq!(curry.default_servings, 2);
    assert!(curry.is_vegetarian && curry.is_vegan && !curry.is_quick);

    let lines = catalogue.ingredients(curry.id).await?;
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].name, "Onion");
    assert_eq!(lines[0].area.as_deref(), Some("Produce"));
    assert_eq!(lines[0].quantity, Some(1.0));
    assert_eq!(lines[0].unit.as_deref(), Some("pc"));
    assert_eq!(lines[2].name, "Salt");
    assert_eq!(lines[2].area, None);
    assert_eq!(lines[2].quantity, None);
    assert_eq!(lines[2].unit, None);

    Ok(())
}

#[tokio::test]
async fn test_reimport_replaces_ingredient_lines() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let summary = import(&pool, &helpers::document()).await?;
    assert_eq!(summary.meals, 4);
    assert_eq!(summary.ingredients, 8);

    let document = mealroll_db::CatalogueDocument::from_json(
        r#"{"meals":[{"name":"Veg Curry","category":"Curry","vegetarian":true,
            "default_servings":4,"ingredients":[{"name":"Onion","quantity":3,"unit":"pc"}]}]}"#,
    )?;
    import(&pool, &document).await?;

    let catalogue = SqliteCatalogue::new(pool);
    assert_eq!(catalogue.meal_names().await?.len(), 4);

    let curry = catalogue.meal_by_name("Veg Curry").await?.unwrap();
    assert_eq!(curry.default_servings, 4);
    assert!(!curry.is_vegan);

    let lines = catalogue.ingredients(curry.id).await?;
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, Some(3.0));
    // area assigned by the first import is kept
    assert_eq!(lines[0].area.as_deref(), Some("Produce"));

    Ok(())
}

#[tokio::test]
async fn test_invalid_document_writes_nothing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;

    let document = mealroll_db::CatalogueDocument::from_json(
        r#"{"meals":[
            {"name":"Dal","category":"Curry","default_servings":2},
            {"name":"Broken","category":"Curry","default_servings":0}
        ]}"#,
    )?;
    assert!(matches!(
        import(&pool, &document).await,
        Err(mealroll_shared::Error::Validate(_))
    ));

    let catalogue = SqliteCatalogue::new(pool);
    assert!(catalogue.meal_names().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_reconnects_after_pool_closed() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    import(&pool, &helpers::document()).await?;
    let catalogue = SqliteCatalogue::new(pool.clone());

    pool.close().await;

    assert_eq!(catalogue.meal_names().await?.len(), 4);
    assert!(!catalogue.pool().is_closed());

    Ok(())
}

#[tokio::test]
async fn test_store_unavailable_when_reconnect_fails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = dir.child("store");
    std::fs::create_dir(&store)?;
    let pool = helpers::setup_test_pool(store.join("db.sqlite3")).await?;
    import(&pool, &helpers::document()).await?;
    let catalogue = SqliteCatalogue::new(pool.clone());

    pool.close().await;
    std::fs::remove_dir_all(&store)?;

    let err = catalogue.meal_names().await.unwrap_err();
    assert!(matches!(err, Error::StoreUnavailable(_)), "{err:?}");

    let err = catalogue.ingredients(1).await.unwrap_err();
    assert!(matches!(err, Error::StoreUnavailable(_)), "{err:?}");

    Ok(())
}
