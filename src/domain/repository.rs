pub trait Connection: Send + Sync {
    type Conn: Send + Sync;
    type Error: Send + Sync;

    fn conn(&self) -> &Self::Conn;
}
