/// Two recipes as `GET /recipes/` returns them, one with a UUID id and one
/// with a numeric id.
pub fn catalog_fixture() -> &'static str {
    return r#"
[
    {
        "id": "0d2f6a7e-3c1b-4c55-9d8e-7f8f2b6b1a10",
        "title": "Spicy Tomato Pasta",
        "description": "Weeknight dinner favorite.",
        "ingredients": ["pasta", "tomatoes", "garlic"],
        "steps": ["Boil pasta", "Simmer sauce", "Combine everything"],
        "tags": ["pasta", "quick"]
    },
    {
        "id": 1,
        "title": "Soup",
        "description": null,
        "ingredients": ["water", "salt"],
        "steps": ["Boil"],
        "tags": []
    }
]
"#
    .trim();
}

/// A `POST /chat/respond` answer carrying two unsaved suggestions.
pub fn chat_fixture() -> &'static str {
    return r#"
{
    "reply": "Here are two sweet breakfasts.",
    "suggestions": [
        {
            "title": "Pancakes",
            "description": "Fluffy and quick.",
            "ingredients": ["flour", "milk"],
            "steps": ["Mix", "Fry"],
            "tags": ["breakfast"]
        },
        {
            "title": "French Toast",
            "description": null,
            "ingredients": ["bread", "eggs", "cinnamon"],
            "steps": ["Soak", "Fry"],
            "tags": ["breakfast", "sweet"]
        }
    ]
}
"#
    .trim();
}
