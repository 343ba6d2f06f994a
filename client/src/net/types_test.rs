use super::*;

// =============================================================
// RecipeId
// =============================================================

#[test]
fn recipe_id_deserializes_from_integer() {
    let id: RecipeId = serde_json::from_str("42").unwrap();
    assert_eq!(id.as_str(), "42");
}

#[test]
fn recipe_id_deserializes_from_string() {
    let id: RecipeId = serde_json::from_str("\"tea-1\"").unwrap();
    assert_eq!(id, RecipeId::from("tea-1"));
}

#[test]
fn recipe_id_rejects_fractional_and_empty() {
    assert!(serde_json::from_str::<RecipeId>("1.5").is_err());
    assert!(serde_json::from_str::<RecipeId>("\"\"").is_err());
    assert!(serde_json::from_str::<RecipeId>("null").is_err());
}

#[test]
fn recipe_id_displays_raw_key() {
    assert_eq!(RecipeId::new("7").to_string(), "7");
}

// =============================================================
// Recipe
// =============================================================

#[test]
fn recipe_decodes_service_shape() {
    let recipe: Recipe = serde_json::from_value(serde_json::json!({
        "id": 3,
        "title": "Tea",
        "ingredients": "water, leaves",
        "instructions": "boil",
        "cuisine": "Asian",
        "dietary_preferences": "vegan",
        "average_rating": 4.5
    }))
    .unwrap();
    assert_eq!(recipe.id, RecipeId::from("3"));
    assert_eq!(recipe.title, "Tea");
    assert!((recipe.average_rating - 4.5).abs() < f64::EPSILON);
    assert!(recipe.image_url.is_none());
    assert!(recipe.comments.is_empty());
}

#[test]
fn recipe_null_rating_and_optional_text_default() {
    let recipe: Recipe = serde_json::from_value(serde_json::json!({
        "id": "r1",
        "title": "Toast",
        "ingredients": "bread",
        "instructions": "toast it",
        "cuisine": null,
        "average_rating": null
    }))
    .unwrap();
    assert_eq!(recipe.cuisine, "");
    assert_eq!(recipe.dietary_preferences, "");
    assert!(recipe.average_rating.abs() < f64::EPSILON);
}

#[test]
fn recipe_missing_required_field_fails() {
    let result = serde_json::from_value::<Recipe>(serde_json::json!({
        "id": 1,
        "title": "No instructions",
        "ingredients": "x"
    }));
    assert!(result.is_err());
}

#[test]
fn recipe_accepts_camel_case_image_url_and_embedded_comments() {
    let recipe: Recipe = serde_json::from_value(serde_json::json!({
        "id": 1,
        "title": "Soup",
        "ingredients": "stock",
        "instructions": "simmer",
        "imageUrl": "https://img.example/soup.jpg",
        "comments": [
            {"content": "first", "created_at": "2024-01-01T00:00:00"},
            {"content": "second"}
        ]
    }))
    .unwrap();
    assert_eq!(recipe.image_url.as_deref(), Some("https://img.example/soup.jpg"));
    let contents: Vec<_> = recipe.comments.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, ["first", "second"]);
    assert_eq!(recipe.comments[1].created_at, None);
}

// =============================================================
// RecipeDraft
// =============================================================

#[test]
fn create_draft_serializes_form_fields_only() {
    let draft = RecipeDraft {
        title: "Tea".to_owned(),
        ingredients: "water, leaves".to_owned(),
        instructions: "boil".to_owned(),
        cuisine: "Asian".to_owned(),
        dietary_preferences: "vegan".to_owned(),
        ..RecipeDraft::default()
    };
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        serde_json::json!({
            "title": "Tea",
            "ingredients": "water, leaves",
            "instructions": "boil",
            "cuisine": "Asian",
            "dietary_preferences": "vegan"
        })
    );
}

#[test]
fn draft_from_recipe_copies_writable_fields() {
    let recipe = Recipe {
        id: RecipeId::from("9"),
        title: "Rice".to_owned(),
        ingredients: "rice, water".to_owned(),
        instructions: "steam".to_owned(),
        cuisine: "Asian".to_owned(),
        dietary_preferences: "vegan".to_owned(),
        average_rating: 3.0,
        image_url: Some("rice.jpg".to_owned()),
        comments: vec![Comment { content: "nice".to_owned(), created_at: None }],
    };
    let draft = RecipeDraft::from(&recipe);
    assert_eq!(draft.title, "Rice");
    assert_eq!(draft.image_url.as_deref(), Some("rice.jpg"));
    assert_eq!(draft.id, Some(RecipeId::from("9")));
    assert_eq!(draft.average_rating, Some(3.0));
}

fn loaded_tea() -> Recipe {
    serde_json::from_str(
        r#"{"id":1,"title":"Tea","ingredients":"w","instructions":"b","cuisine":"Asian","dietary_preferences":"vegan","average_rating":4.0}"#,
    )
    .unwrap()
}

#[test]
fn update_body_echoes_loaded_id_and_rating() {
    let loaded = loaded_tea();
    let mut edited = RecipeDraft::from(&loaded);
    edited.title = "Green Tea".to_owned();

    let body = serde_json::to_value(edited.for_update(&RecipeId::from("1"), Some(&loaded))).unwrap();
    assert_eq!(body["id"], "1");
    assert_eq!(body["average_rating"], 4.0);
    assert_eq!(body["title"], "Green Tea");
    assert_eq!(body["ingredients"], "w");
}

#[test]
fn update_body_prefers_latest_service_copy() {
    let mut loaded = loaded_tea();
    let draft = RecipeDraft::from(&loaded);
    loaded.average_rating = 4.5;

    let body = draft.for_update(&RecipeId::from("1"), Some(&loaded));
    assert_eq!(body.average_rating, Some(4.5));
    assert_eq!(body.title, "Tea");
}

#[test]
fn update_body_without_loaded_copy_still_names_the_recipe() {
    let draft = RecipeDraft { title: "Tea".to_owned(), ..RecipeDraft::default() };
    let body = draft.for_update(&RecipeId::from("7"), None);
    assert_eq!(body.id, Some(RecipeId::from("7")));
    assert_eq!(body.average_rating, None);
}

// =============================================================
// SearchQuery / Rating / request bodies
// =============================================================

#[test]
fn search_params_skip_blank_filters_and_trim() {
    let query = SearchQuery {
        keyword: "  tea ".to_owned(),
        cuisine: String::new(),
        dietary_preference: "vegan".to_owned(),
    };
    assert_eq!(
        query.params(),
        vec![("keyword", "tea".to_owned()), ("dietary_preference", "vegan".to_owned())]
    );
    assert!(SearchQuery::default().params().is_empty());
}

#[test]
fn rating_bounds() {
    assert_eq!(Rating::new(0).map(Rating::value), Some(0));
    assert_eq!(Rating::new(5).map(Rating::value), Some(5));
    assert!(Rating::new(6).is_none());
    assert_eq!(Rating::all().count(), 6);
}

#[test]
fn request_bodies_match_service_shape() {
    let rate = RateRequest { rating: Rating::new(4).unwrap() };
    assert_eq!(serde_json::to_value(rate).unwrap(), serde_json::json!({ "rating": 4 }));

    let comment = CommentRequest { content: "lovely" };
    assert_eq!(serde_json::to_value(&comment).unwrap(), serde_json::json!({ "content": "lovely" }));

    let share = ShareRequest { share_method: "Email" };
    assert_eq!(serde_json::to_value(&share).unwrap(), serde_json::json!({ "share_method": "Email" }));
}

#[test]
fn share_ack_tolerates_missing_message() {
    let ack: ShareAck = serde_json::from_str("{}").unwrap();
    assert_eq!(ack.message, None);
    let ack: ShareAck = serde_json::from_str(r#"{"message":"Recipe shared via Email"}"#).unwrap();
    assert_eq!(ack.message.as_deref(), Some("Recipe shared via Email"));
}
