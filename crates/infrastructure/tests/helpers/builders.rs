#![allow(dead_code)]

/// Builds raw query datagrams byte by byte.
pub struct QueryBuilder {
    id: u16,
    flags: u16,
    qdcount: Option<u16>,
    questions: Vec<Vec<u8>>,
    trailing: Vec<u8>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x1234,
            flags: 0x0100, // RD
            qdcount: None,
            questions: Vec::new(),
            trailing: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    /// Overrides the QDCOUNT that would otherwise match the questions added.
    pub fn qdcount(mut self, count: u16) -> Self {
        self.qdcount = Some(count);
        self
    }

    /// Adds a question; an empty `name` encodes the root.
    pub fn question(mut self, name: &str, qtype: u16) -> Self {
        let mut q = Vec::new();
        if !name.is_empty() {
            for label in name.split('.') {
                q.push(label.len() as u8);
                q.extend_from_slice(label.as_bytes());
            }
        }
        q.push(0x00);
        q.extend_from_slice(&qtype.to_be_bytes());
        q.extend_from_slice(&[0x00, 0x01]); // QCLASS = IN
        self.questions.push(q);
        self
    }

    pub fn a(self, name: &str) -> Self {
        self.question(name, 1)
    }

    /// Appends raw bytes after the question section.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.trailing.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let qdcount = self.qdcount.unwrap_or(self.questions.len() as u16);
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&qdcount.to_be_bytes());
        buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        for q in &self.questions {
            buf.extend_from_slice(q);
        }
        buf.extend_from_slice(&self.trailing);
        buf
    }
}
