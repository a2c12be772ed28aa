use super::*;

pub fn leanne() -> UserRecord {
    UserRecord {
        id: 1,
        name: "Leanne Graham".to_string(),
        username: "Bret".to_string(),
        email: "Sincere@april.biz".to_string(),
        phone: "1-770-736-8031".to_string(),
        website: "hildegard.org".to_string(),
        address: Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
            geo: None,
        },
        company: Company {
            name: "Romaguera-Crona".to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: None,
        },
    }
}

/// `count` users with ids counting down from `count`, so source order never matches id order.
pub fn numbered(count: i64) -> UserCollection {
    (1..=count)
        .rev()
        .map(|id| UserRecord {
            id,
            name: format!("User {}", id),
            username: format!("user{}", id),
            ..Default::default()
        })
        .collect()
}
