pub trait Logger {
    fn info(&self, message: &str);
    fn with_namespace(&self, namespace: &str) -> Box<dyn Logger>;
}
