/// Test data factories using builder pattern
///
/// Provides convenient methods to create catalog items with sensible defaults
use storefront_lib::modules::catalog::CatalogItem;

pub struct CatalogItemFactory {
    id: String,
    name: String,
    artist: String,
    category: String,
    image_url: String,
    price: f64,
    rank: usize,
}

impl Default for CatalogItemFactory {
    fn default() -> Self {
        let id = format!("{}", rand::random::<u32>() % 1_000_000_000 + 1_000_000);
        Self {
            image_url: format!("https://is1-ssl.mzstatic.com/image/thumb/{}/170x170bb.png", id),
            id,
            name: "Test Album".to_string(),
            artist: "Test Artist".to_string(),
            category: "Pop".to_string(),
            price: 9.99,
            rank: 0,
        }
    }
}

impl CatalogItemFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn artist(mut self, artist: &str) -> Self {
        self.artist = artist.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn rank(mut self, rank: usize) -> Self {
        self.rank = rank;
        self
    }

    pub fn build(self) -> CatalogItem {
        CatalogItem {
            id: self.id,
            name: self.name,
            artist: self.artist,
            category: self.category,
            image_url: self.image_url,
            price: self.price,
            rank: self.rank,
        }
    }
}

/// Ten-item chart in feed order (rank == index)
pub fn mock_catalog() -> Vec<CatalogItem> {
    [
        ("& - EP", "Lady A", "Country", 9.99),
        ("Midnights", "Taylor Swift", "Pop", 11.99),
        ("NOW That's What I Call Country, Vol. 15", "Various Artists", "Country", 9.99),
        ("Un Verano Sin Ti", "Bad Bunny", "Latino", 14.99),
        ("NOW That's What I Call Music! Vol. 83", "Various Artists", "Pop", 12.99),
        ("If I Know Me", "Morgan Wallen", "Country", 6.99),
        ("Harry's House", "Harry Styles", "Pop", 10.99),
        ("Renaissance", "Beyoncé", "Dance", 11.99),
        ("Country Stuff The Album", "Walker Hayes", "Country", 9.99),
        ("SOUR", "Olivia Rodrigo", "Pop", 10.99),
    ]
    .into_iter()
    .enumerate()
    .map(|(rank, (name, artist, category, price))| {
        CatalogItemFactory::new()
            .id(&format!("album-{}", rank))
            .name(name)
            .artist(artist)
            .category(category)
            .price(price)
            .rank(rank)
            .build()
    })
    .collect()
}

/// Names of `items`, in order
pub fn names<'a>(items: impl IntoIterator<Item = &'a CatalogItem>) -> Vec<&'a str> {
    items.into_iter().map(|item| item.name.as_str()).collect()
}
