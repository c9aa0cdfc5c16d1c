use super::{Explanation, Topic, TopicGroup};

pub static GROUPS: &[TopicGroup] = &[
    TopicGroup { title: "Definition", icon: "📘", topics: DEFINITION },
    TopicGroup { title: "Structure", icon: "🧱", topics: STRUCTURE },
    TopicGroup { title: "Operations", icon: "🛠", topics: OPERATIONS },
    TopicGroup { title: "Advantages", icon: "✅", topics: ADVANTAGES },
    TopicGroup { title: "Disadvantages", icon: "⚠", topics: DISADVANTAGES },
    TopicGroup { title: "Applications", icon: "🌐", topics: APPLICATIONS },
];

// =============================================================================
// DEFINITION
// =============================================================================

const DEFINITION: &[Topic] = &[
    Topic {
        label: "Sequence of nodes",
        explanation: Explanation {
            heading: "Sequence of Nodes",
            definition: "A singly linked list is a linear data structure made of a sequence of nodes, where each \
                node holds data and a reference to the next node. Unlike arrays, linked lists need no contiguous \
                memory and can grow or shrink while the program runs.",
            mechanism: "Every node keeps a 'next' link to the node after it, forming a chain. The list starts at \
                a 'head' node and ends at a node whose next link is empty. Operations walk the chain by following \
                the links, which makes sequential access cheap and random access linear.",
            analogy: "Like a chain of people holding hands: each person knows who comes next in line.",
            complexity: "O(n) for traversal, where n is the number of nodes",
            example_code: Some(
                r"// Build 10 -> 20 -> 30 from the tail forward
let tail = Box::new(Node { data: 30, next: None });
let middle = Box::new(Node { data: 20, next: Some(tail) });
let head = Some(Box::new(Node { data: 10, next: Some(middle) }));",
            ),
        },
    },
    Topic {
        label: "Each node contains Data + Next pointer",
        explanation: Explanation {
            heading: "Node Structure",
            definition: "Each node is a building block with two parts: the data payload, which can be any type, \
                and a next pointer that connects it to the following node. This self-referential shape is what \
                makes dynamic linking possible.",
            mechanism: "The data field stores the value the node represents, from a plain number to a large \
                struct. The next field either owns the following node or is empty to mark the end. Nodes are \
                allocated one at a time and joined by assigning these links.",
            analogy: "A train car carrying passengers (data) and coupled to the next car (next pointer).",
            complexity: "Space complexity: O(n) for n nodes",
            example_code: Some(
                r"struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

let node = Node { data: 10, next: None };",
            ),
        },
    },
];

// =============================================================================
// STRUCTURE
// =============================================================================

const STRUCTURE: &[Topic] = &[
    Topic {
        label: "Head node",
        explanation: Explanation {
            heading: "Head Node",
            definition: "The head is the entry point of the whole list. It always refers to the first node and \
                gives every operation and traversal a fixed place to start.",
            mechanism: "All operations begin at the head. An empty list has no head. Adding or removing at the \
                front updates the head directly. The head gives O(1) access to the first element only; every \
                other element is reached by walking forward.",
            analogy: "The front door of a house: you enter through it to reach every room.",
            complexity: "O(1) access time",
            example_code: Some(
                r"// Empty list
let mut head: Option<Box<Node<i32>>> = None;

// Push a first node
head = Some(Box::new(Node { data: 10, next: head.take() }));",
            ),
        },
    },
    Topic {
        label: "Node = Data + Next",
        explanation: Explanation {
            heading: "Node Composition",
            definition: "A node is the atomic unit of the list and has exactly two fields: the data it carries \
                and the link that places it in the sequence. That composition is what gives the list its \
                flexible shape.",
            mechanism: "The data field can be any type, from integers and strings to whole structs. The next \
                field either points at another node or is empty to end the list. Nodes are created \
                independently and then linked, so the list can grow, shrink and be reordered cheaply.",
            analogy: "A bead (data) on a string (next pointer) that leads to the next bead.",
            complexity: "Fixed link size per node regardless of data type",
            example_code: Some(
                r"let mut first = Node { data: 10, next: None };
let second = Node { data: 20, next: None };

// Link them
first.next = Some(Box::new(second));",
            ),
        },
    },
    Topic {
        label: "NULL at the end",
        explanation: Explanation {
            heading: "Null Termination",
            definition: "The last node's next link is empty (null). That sentinel marks the end of the list and \
                stops traversals from running past it.",
            mechanism: "Every operation checks for the empty link to find the boundary. A traversal follows \
                next links until it meets the end marker, which gives every loop a clear stopping condition and \
                prevents reading past the last node.",
            analogy: "The end of a necklace where the string stops: no more beads to follow.",
            complexity: "O(1) to detect the end of the list",
            example_code: Some(
                r#"fn print_all(head: &Option<Box<Node<i32>>>) {
    let mut current = head.as_deref();
    while let Some(node) = current {
        println!("{}", node.data);
        current = node.next.as_deref(); // None marks the end
    }
}"#,
            ),
        },
    },
];

// =============================================================================
// OPERATIONS
// =============================================================================

const OPERATIONS: &[Topic] = &[
    Topic {
        label: "Insertion",
        explanation: Explanation {
            heading: "Insertion Operation",
            definition: "Insertion adds a new node at a chosen position. The links around that position are \
                rewired so the list stays connected.",
            mechanism: "Create the node, point its next link at the node that should follow it, then point the \
                previous node (or the head, when inserting at the front) at the new node. Only these two links \
                change.",
            analogy: "Adding a train car between two others by reconnecting the couplings.",
            complexity: "O(1) at head, O(n) at an arbitrary position",
            example_code: Some(
                r"fn push_front(head: &mut Option<Box<Node<i32>>>, data: i32) {
    let next = head.take();
    *head = Some(Box::new(Node { data, next }));
}

fn push_back(head: &mut Option<Box<Node<i32>>>, data: i32) {
    let mut cursor = head;
    while let Some(node) = cursor {
        cursor = &mut node.next;
    }
    *cursor = Some(Box::new(Node { data, next: None }));
}",
            ),
        },
    },
    Topic {
        label: "Deletion",
        explanation: Explanation {
            heading: "Deletion Operation",
            definition: "Deletion removes one node while keeping the remaining nodes connected. The neighbours \
                of the removed node are linked directly to close the gap.",
            mechanism: "Find the node to remove and its predecessor, then point the predecessor's next link at \
                the node after the target. The detached node is dropped. Removing the head is the special case \
                where the head itself moves forward.",
            analogy: "Taking a car out of a train and coupling the remaining cars back together.",
            complexity: "O(1) at head, O(n) at an arbitrary position",
            example_code: Some(
                r"fn pop_front(head: &mut Option<Box<Node<i32>>>) -> Option<i32> {
    head.take().map(|node| {
        *head = node.next;
        node.data
    })
}",
            ),
        },
    },
    Topic {
        label: "Traversal",
        explanation: Explanation {
            heading: "Traversal Operation",
            definition: "Traversal visits every node exactly once, from head to tail, processing each node's \
                data in order.",
            mechanism: "Start at the head and follow the next links. At each node do the work (print, update, \
                collect) and move on until the empty link at the end. The visiting order always matches the \
                list order.",
            analogy: "Walking through every room of a house by following the hallway from room to room.",
            complexity: "O(n) time complexity",
            example_code: Some(
                r"fn sum(head: &Option<Box<Node<i32>>>) -> i32 {
    let mut total = 0;
    let mut current = head.as_deref();
    while let Some(node) = current {
        total += node.data;
        current = node.next.as_deref();
    }
    total
}",
            ),
        },
    },
    Topic {
        label: "Searching",
        explanation: Explanation {
            heading: "Search Operation",
            definition: "Searching looks for a value by walking the list and comparing each node's data with \
                the target until a match is found or the list ends.",
            mechanism: "Begin at the head and compare node by node. Return as soon as the data matches; if the \
                walk reaches the end, the value is absent. With no index to jump to, a linear scan is the only \
                option.",
            analogy: "Looking for a book on a shelf by checking each spine one by one.",
            complexity: "O(n) worst case, O(1) best case",
            example_code: Some(
                r"fn contains(head: &Option<Box<Node<i32>>>, target: i32) -> bool {
    let mut current = head.as_deref();
    while let Some(node) = current {
        if node.data == target {
            return true;
        }
        current = node.next.as_deref();
    }
    false
}",
            ),
        },
    },
];

// =============================================================================
// ADVANTAGES
// =============================================================================

const ADVANTAGES: &[Topic] = &[
    Topic {
        label: "Dynamic size",
        explanation: Explanation {
            heading: "Dynamic Size",
            definition: "A linked list grows and shrinks at runtime without a fixed capacity and without costly \
                resize-and-copy steps.",
            mechanism: "Memory is allocated per node when one is added and released when it is removed. No \
                contiguous block is needed, so the list only ever uses memory for the elements it holds.",
            analogy: "A rope that can be lengthened or shortened as needed, unlike a fixed-length chain.",
            complexity: "No size restrictions",
            example_code: None,
        },
    },
    Topic {
        label: "Efficient insertion & deletion",
        explanation: Explanation {
            heading: "Efficient Modifications",
            definition: "Insertions and deletions at known positions are cheap, which is a major advantage over \
                contiguous array storage.",
            mechanism: "A change only rewires links; no elements are shifted. At the head only the head link \
                changes. Elsewhere, once the position has been reached, the change itself takes constant time.",
            analogy: "Adding or removing cars at the front of a train is quick and easy.",
            complexity: "O(1) at known positions",
            example_code: None,
        },
    },
    Topic {
        label: "Easy to implement",
        explanation: Explanation {
            heading: "Simple Implementation",
            definition: "A singly linked list needs very little code and only basic concepts, which makes it a \
                common first data structure.",
            mechanism: "There are two ingredients: creating nodes with data and a next link, and moving links \
                around. No balancing or resizing logic is involved, so there is little room for bugs.",
            analogy: "Building with LEGO bricks: simple connections make larger structures.",
            complexity: "Basic programming knowledge required",
            example_code: Some(
                r"pub struct Stack<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { head: None }
    }

    pub fn push(&mut self, data: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { data, next }));
    }
}",
            ),
        },
    },
    Topic {
        label: "No size limit",
        explanation: Explanation {
            heading: "Unlimited Size",
            definition: "Unlike fixed arrays, a linked list has no capacity decided in advance. Its only limit is \
                the memory available.",
            mechanism: "The list extends by allocating one more node whenever needed. Each node is allocated on \
                its own, so growth never requires a bigger contiguous block or pre-allocation.",
            analogy: "A garden hose that extends as far as you need.",
            complexity: "Limited only by available memory",
            example_code: None,
        },
    },
    Topic {
        label: "Memory efficient for modifications",
        explanation: Explanation {
            heading: "Efficient Memory Usage for Changes",
            definition: "Frequent insertions and deletions avoid the element shifting that arrays need, which \
                keeps changes cheap for dynamic data.",
            mechanism: "Adding or removing an element touches only a couple of links instead of copying large \
                blocks of memory. The work stays local to the changed position.",
            analogy: "Rearranging train cars by changing couplings instead of rebuilding the train.",
            complexity: "O(1) for link updates",
            example_code: None,
        },
    },
];

// =============================================================================
// DISADVANTAGES
// =============================================================================

const DISADVANTAGES: &[Topic] = &[
    Topic {
        label: "No random access",
        explanation: Explanation {
            heading: "No Random Access",
            definition: "Elements cannot be reached by index directly. Every access starts from the head and \
                walks forward.",
            mechanism: "Reaching the nth element means following n-1 links from the head. Elements near the end \
                are only reachable after visiting everything before them.",
            analogy: "You can't open a scroll at page 50 without unrolling pages 1 to 49 first.",
            complexity: "O(n) access time",
            example_code: None,
        },
    },
    Topic {
        label: "Extra memory for pointers",
        explanation: Explanation {
            heading: "Memory Overhead",
            definition: "Each node stores a next link on top of its data, so a list uses more memory than an \
                array holding the same values.",
            mechanism: "Every node carries its data plus a pointer (8 bytes on 64-bit targets) and an \
                allocation header. For small payloads the bookkeeping can outweigh the data itself and hurts \
                cache use.",
            analogy: "Every passenger car needs space for passengers and also a coupling mechanism.",
            complexity: "O(n) extra space for pointers",
            example_code: None,
        },
    },
    Topic {
        label: "Cache unfriendly",
        explanation: Explanation {
            heading: "Cache Unfriendly",
            definition: "Nodes are scattered across memory instead of sitting side by side, so walking a list \
                causes many cache misses.",
            mechanism: "CPUs speed up memory reads by caching neighbouring bytes. Individually allocated nodes \
                may live on different pages, so each link followed can miss the cache, which is much slower \
                than scanning a contiguous array.",
            analogy: "Books scattered randomly across a library instead of shelved in order.",
            complexity: "Poor spatial locality",
            example_code: None,
        },
    },
    Topic {
        label: "Reverse traversal not possible",
        explanation: Explanation {
            heading: "No Reverse Traversal",
            definition: "Links only point forward, so a singly linked list cannot be walked from tail to head.",
            mechanism: "A node knows its successor but not its predecessor. Going backwards needs extra \
                bookkeeping, a reversed copy, or a doubly linked list.",
            analogy: "A one-way street: you can only drive forward.",
            complexity: "O(n) to reverse, or use a doubly linked list",
            example_code: Some(
                r"fn reverse(mut head: Option<Box<Node<i32>>>) -> Option<Box<Node<i32>>> {
    let mut prev = None;
    while let Some(mut node) = head {
        head = node.next.take();
        node.next = prev;
        prev = Some(node);
    }
    prev
}",
            ),
        },
    },
    Topic {
        label: "Linear search time",
        explanation: Explanation {
            heading: "Linear Search Time",
            definition: "Finding a value means checking elements one after another from the head, so search \
                time grows with the list.",
            mechanism: "Without indexing, a search compares every node with the target until it matches or the \
                list ends. That makes lists a poor fit for large collections with frequent lookups.",
            analogy: "Looking for a name in an unsorted contact list by reading every entry.",
            complexity: "O(n) worst case",
            example_code: None,
        },
    },
];

// =============================================================================
// APPLICATIONS
// =============================================================================

const APPLICATIONS: &[Topic] = &[
    Topic {
        label: "Music playlists",
        explanation: Explanation {
            heading: "Music Playlists",
            definition: "Playlists keep songs in play order, and a linked list lets tracks be added or removed \
                anywhere without shifting the rest.",
            mechanism: "Each song is a node with its metadata and a link to the next song. Tracks can be queued \
                at the front, middle or end, and playback simply follows the links.",
            analogy: "A streaming playlist where each song leads into the next.",
            complexity: "Dynamic playlist management",
            example_code: None,
        },
    },
    Topic {
        label: "Browser history",
        explanation: Explanation {
            heading: "Browser History",
            definition: "Browsers track visited pages as a linked sequence so the user can move back and forth \
                through a session.",
            mechanism: "Each visited URL becomes a node linked in visit order. A cursor moves along the list as \
                the user navigates, and visiting a new page from the middle drops the forward part.",
            analogy: "The Back and Forward buttons stepping through linked page history.",
            complexity: "Efficient navigation",
            example_code: None,
        },
    },
    Topic {
        label: "Undo/Redo operations",
        explanation: Explanation {
            heading: "Undo/Redo Stack",
            definition: "Editors record user actions in a linked sequence so they can be reversed or \
                reapplied.",
            mechanism: "Each action (typing, deleting, formatting) becomes a node holding enough information to \
                undo it. Pushing and popping at the head gives constant-time undo and redo.",
            analogy: "Ctrl+Z walking back through a chain of reversible edits.",
            complexity: "O(1) undo/redo operations",
            example_code: None,
        },
    },
    Topic {
        label: "Hash tables with chaining",
        explanation: Explanation {
            heading: "Hash Table Collision Resolution",
            definition: "Hash tables can resolve collisions by keeping a linked list in each bucket for every \
                entry that hashes there.",
            mechanism: "When two keys land in the same bucket, the new entry is linked into that bucket's list \
                instead of overwriting. Lookups hash to the bucket and then walk its short chain.",
            analogy: "Several coats hung on the same hook, one behind another.",
            complexity: "Average O(1) access, worst case O(n)",
            example_code: Some(
                r"struct Entry {
    key: u64,
    value: String,
    next: Option<Box<Entry>>,
}

struct Table {
    buckets: Vec<Option<Box<Entry>>>,
}

impl Table {
    fn insert(&mut self, key: u64, value: String) {
        let index = (key % self.buckets.len() as u64) as usize;
        let next = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Entry { key, value, next }));
    }
}",
            ),
        },
    },
    Topic {
        label: "Graph adjacency lists",
        explanation: Explanation {
            heading: "Graph Representations",
            definition: "Adjacency lists store, for every vertex, a linked list of its neighbours. This is a \
                compact representation for sparse graphs.",
            mechanism: "Each vertex owns a list of the vertices it shares an edge with. Memory grows with the \
                number of edges rather than with vertices squared, and iterating a vertex's neighbours is a \
                simple walk, which suits BFS and DFS.",
            analogy: "A social network where each person keeps a list of friends.",
            complexity: "Space efficient for sparse graphs",
            example_code: Some(
                r"struct Edge {
    to: usize,
    next: Option<Box<Edge>>,
}

struct Graph {
    adjacency: Vec<Option<Box<Edge>>>,
}

impl Graph {
    fn add_edge(&mut self, a: usize, b: usize) {
        let next = self.adjacency[a].take();
        self.adjacency[a] = Some(Box::new(Edge { to: b, next }));
        let next = self.adjacency[b].take();
        self.adjacency[b] = Some(Box::new(Edge { to: a, next }));
    }
}",
            ),
        },
    },
    Topic {
        label: "Memory management",
        explanation: Explanation {
            heading: "Memory Allocation",
            definition: "Allocators keep free memory blocks in linked lists so blocks can be handed out and \
                returned efficiently.",
            mechanism: "Each free block stores a link to the next free block. Allocation takes a suitable block \
                off the list; freeing pushes it back, where adjacent blocks can be merged.",
            analogy: "malloc and free in C managing the heap with free lists.",
            complexity: "Efficient memory allocation/deallocation",
            example_code: None,
        },
    },
];
