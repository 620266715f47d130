/// Compression pointer to offset 12, where the first question name starts.
pub const POINTER_TO_QUESTION: [u8; 2] = [0xC0, 0x0C];

/// Uncompressed label sequence for `name`, root terminated.
pub fn labels(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

/// Assembles response messages byte by byte.
///
/// Section counts follow what was added unless overridden with
/// [`ResponseBuilder::counts`], which is how malformed messages are made.
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    counts: [u16; 4],
    forced_counts: Option<[u16; 4]>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: 0x8180,
            counts: [0; 4],
            forced_counts: None,
            body: Vec::new(),
        }
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn counts(mut self, qd: u16, an: u16, ns: u16, ar: u16) -> Self {
        self.forced_counts = Some([qd, an, ns, ar]);
        self
    }

    /// Offset in the finished message of the next byte appended.
    pub fn next_offset(&self) -> usize {
        12 + self.body.len()
    }

    pub fn question(mut self, name: &str, record_type: u16) -> Self {
        self.body.extend_from_slice(&labels(name));
        self.body.extend_from_slice(&record_type.to_be_bytes());
        self.body.extend_from_slice(&1u16.to_be_bytes());
        self.counts[0] += 1;
        self
    }

    pub fn answer(mut self, owner: &[u8], record_type: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.push_record(owner, record_type, ttl, rdata);
        self.counts[1] += 1;
        self
    }

    pub fn authority(mut self, owner: &[u8], record_type: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.push_record(owner, record_type, ttl, rdata);
        self.counts[2] += 1;
        self
    }

    pub fn additional(mut self, owner: &[u8], record_type: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.push_record(owner, record_type, ttl, rdata);
        self.counts[3] += 1;
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let [qd, an, ns, ar] = self.forced_counts.unwrap_or(self.counts);
        let mut out = Vec::with_capacity(12 + self.body.len());
        for word in [self.id, self.flags, qd, an, ns, ar] {
            out.extend_from_slice(&word.to_be_bytes());
        }
        out.extend_from_slice(&self.body);
        out
    }

    fn push_record(&mut self, owner: &[u8], record_type: u16, ttl: u32, rdata: &[u8]) {
        self.body.extend_from_slice(owner);
        self.body.extend_from_slice(&record_type.to_be_bytes());
        self.body.extend_from_slice(&1u16.to_be_bytes());
        self.body.extend_from_slice(&ttl.to_be_bytes());
        self.body.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        self.body.extend_from_slice(rdata);
    }
}
