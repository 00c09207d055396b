// Queue configuration limits (no magic values)

/// Maximum queue label length in bytes
pub const MAX_QUEUE_LABEL_LEN: usize = 64;

/// Characters allowed in queue labels besides ASCII alphanumerics
pub const QUEUE_LABEL_EXTRA_CHARS: [char; 3] = ['.', '_', '-'];
