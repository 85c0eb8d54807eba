use tokio::sync::broadcast;

/// Fan-out of chat messages to every connected client. Nothing is stored,
/// so a client only sees messages sent while it is connected.
#[derive(Debug, Clone)]
pub struct ChatHub {
    sender: broadcast::Sender<String>,
}

impl ChatHub {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.sender.subscribe()
    }

    /// Sends `message` to all current subscribers and returns how many there
    /// were. Zero subscribers is not an error.
    pub fn publish(&self, message: String) -> usize {
        self.sender.send(message).unwrap_or(0)
    }

    pub fn connected(&self) -> usize {
        self.sender.receiver_count()
    }
}
