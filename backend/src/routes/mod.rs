pub mod figure;
pub mod path;
pub mod shrub;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Route paths are nested under /v1 by the router
        assert_eq!(super::shrub::SHRUB, "/shrub");
        assert_eq!(super::path::GET_PATH, "/path/{start}");
    }
}
