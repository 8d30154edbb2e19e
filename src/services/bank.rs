//! Built-in project ideas, used whenever the AI delegate is unavailable.

use crate::models::{Category, Difficulty, ProjectIdea};

/// A project entry in the static bank
#[derive(Debug, PartialEq, Eq)]
pub struct ProjectTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub hardware: &'static str,
    pub software: &'static [&'static str],
    pub implementation_steps: &'static [&'static str],
    pub estimated_time: &'static str,
    pub job_relevance: &'static str,
}

impl ProjectTemplate {
    /// Materializes the template as a scored idea
    pub fn to_idea(&self, difficulty: Difficulty, success_percentage: f64) -> ProjectIdea {
        ProjectIdea {
            title: self.title.to_string(),
            difficulty,
            success_percentage,
            description: self.description.to_string(),
            tech_stack: to_strings(self.tech_stack),
            hardware: self.hardware.to_string(),
            software: to_strings(self.software),
            implementation_steps: to_strings(self.implementation_steps),
            estimated_time: self.estimated_time.to_string(),
            job_relevance: self.job_relevance.to_string(),
        }
    }
}

pub(crate) fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Projects for one category and tier, in a stable order
pub fn projects(category: Category, difficulty: Difficulty) -> &'static [ProjectTemplate] {
    match (category, difficulty) {
        (Category::Ai, Difficulty::Beginner) => AI_BEGINNER,
        (Category::Ai, Difficulty::Medium) => AI_MEDIUM,
        (Category::Ai, Difficulty::Advanced) => AI_ADVANCED,
        (Category::Cse, Difficulty::Beginner) => CSE_BEGINNER,
        (Category::Cse, Difficulty::Medium) => CSE_MEDIUM,
        (Category::Cse, Difficulty::Advanced) => CSE_ADVANCED,
        (Category::Ece, Difficulty::Beginner) => ECE_BEGINNER,
        (Category::Ece, Difficulty::Medium) => ECE_MEDIUM,
        (Category::Ece, Difficulty::Advanced) => ECE_ADVANCED,
    }
}

/// Every project in a category, tagged with its tier, easiest first
pub fn all_projects(
    category: Category,
) -> impl Iterator<Item = (Difficulty, &'static ProjectTemplate)> {
    Difficulty::ALL
        .into_iter()
        .flat_map(move |difficulty| projects(category, difficulty).iter().map(move |p| (difficulty, p)))
}

const AI_BEGINNER: &[ProjectTemplate] = &[
    ProjectTemplate {
        title: "Fake News Detection System",
        description: "Detects fake news using NLP techniques and machine learning classifiers.",
        tech_stack: &["Python", "NLP", "Scikit-learn", "Pandas", "NLTK"],
        hardware: "None",
        software: &["Python 3.8+", "Jupyter Notebook", "VS Code"],
        implementation_steps: &[
            "Collect dataset of news articles (real and fake)",
            "Preprocess text data (tokenization, stemming, stopword removal)",
            "Extract features using TF-IDF or word embeddings",
            "Train classification model (Naive Bayes, SVM, or Logistic Regression)",
            "Create web interface using Flask/Streamlit",
            "Deploy and test with new articles",
        ],
        estimated_time: "2-3 weeks",
        job_relevance: "High - NLP skills are in high demand in tech companies",
    },
    ProjectTemplate {
        title: "Chatbot for Customer Support",
        description: "Build an intelligent chatbot using NLP to answer customer queries.",
        tech_stack: &["Python", "NLTK", "TensorFlow", "Flask", "Dialogflow"],
        hardware: "None",
        software: &["Python 3.8+", "Flask", "TensorFlow"],
        implementation_steps: &[
            "Define intents and entities for your domain",
            "Create training dataset with question-answer pairs",
            "Train intent classification model",
            "Implement response generation logic",
            "Create API endpoints for chatbot",
            "Build frontend interface",
            "Test and refine responses",
        ],
        estimated_time: "3-4 weeks",
        job_relevance: "High - Chatbots are widely used in industry",
    },
    ProjectTemplate {
        title: "Image Classification with CNN",
        description: "Classify images using Convolutional Neural Networks (e.g., cats vs dogs, handwritten digits).",
        tech_stack: &["Python", "TensorFlow", "Keras", "OpenCV", "NumPy"],
        hardware: "GPU (optional, for faster training)",
        software: &["Python 3.8+", "TensorFlow/Keras", "Jupyter Notebook"],
        implementation_steps: &[
            "Collect and organize image dataset",
            "Preprocess images (resize, normalize)",
            "Split data into train/validation/test sets",
            "Design CNN architecture",
            "Train model with data augmentation",
            "Evaluate model performance",
            "Create prediction interface",
        ],
        estimated_time: "3-4 weeks",
        job_relevance: "Very High - Computer Vision is a core AI skill",
    },
];

const AI_MEDIUM: &[ProjectTemplate] = &[
    ProjectTemplate {
        title: "AI-Based Traffic Management System",
        description: "Uses computer vision and ML to optimize traffic signals in real time based on vehicle density.",
        tech_stack: &["Python", "OpenCV", "YOLO", "TensorFlow", "Flask", "Raspberry Pi"],
        hardware: "Cameras, Raspberry Pi (optional for demo)",
        software: &["Python 3.8+", "OpenCV", "TensorFlow", "Flask"],
        implementation_steps: &[
            "Set up camera system or use video feeds",
            "Implement vehicle detection using YOLO or similar",
            "Count vehicles in each lane",
            "Develop traffic optimization algorithm",
            "Create real-time signal control system",
            "Build dashboard for monitoring",
            "Test with real or simulated traffic data",
        ],
        estimated_time: "6-8 weeks",
        job_relevance: "Very High - Combines AI, IoT, and real-world problem solving",
    },
    ProjectTemplate {
        title: "Sentiment Analysis for Social Media",
        description: "Analyze sentiment of tweets/posts in real-time using advanced NLP and deep learning.",
        tech_stack: &["Python", "Transformers", "BERT", "Flask", "Twitter API", "PostgreSQL"],
        hardware: "None",
        software: &["Python 3.8+", "Hugging Face Transformers", "Flask", "PostgreSQL"],
        implementation_steps: &[
            "Set up Twitter API access",
            "Collect and preprocess social media data",
            "Fine-tune BERT or RoBERTa for sentiment analysis",
            "Implement real-time data streaming",
            "Create database to store results",
            "Build visualization dashboard",
            "Deploy with API endpoints",
        ],
        estimated_time: "5-6 weeks",
        job_relevance: "High - Social media analytics is a growing field",
    },
    ProjectTemplate {
        title: "Recommendation System",
        description: "Build a recommendation engine for movies/products using collaborative filtering and content-based methods.",
        tech_stack: &["Python", "Scikit-learn", "Pandas", "Flask", "SQLite"],
        hardware: "None",
        software: &["Python 3.8+", "Scikit-learn", "Flask"],
        implementation_steps: &[
            "Collect or use existing dataset (MovieLens, etc.)",
            "Preprocess and clean data",
            "Implement collaborative filtering algorithm",
            "Implement content-based filtering",
            "Combine both approaches (hybrid)",
            "Create user interface",
            "Evaluate using metrics (RMSE, MAE)",
        ],
        estimated_time: "4-5 weeks",
        job_relevance: "Very High - Used by Netflix, Amazon, Spotify",
    },
];

const AI_ADVANCED: &[ProjectTemplate] = &[
    ProjectTemplate {
        title: "Autonomous Vehicle Simulation",
        description: "Simulate self-driving car behavior using reinforcement learning and computer vision.",
        tech_stack: &["Python", "TensorFlow", "PyTorch", "OpenAI Gym", "Unity/Unreal", "ROS"],
        hardware: "GPU (required for training)",
        software: &["Python 3.8+", "PyTorch", "OpenAI Gym", "Unity ML-Agents"],
        implementation_steps: &[
            "Set up simulation environment (CARLA or Unity)",
            "Implement sensor data processing (camera, LiDAR)",
            "Design deep RL agent (DQN, PPO, or SAC)",
            "Train agent in simulation",
            "Implement path planning and control",
            "Test in various scenarios",
            "Optimize for real-time performance",
        ],
        estimated_time: "10-12 weeks",
        job_relevance: "Extremely High - Cutting-edge AI research area",
    },
    ProjectTemplate {
        title: "Medical Image Analysis with Deep Learning",
        description: "Detect diseases from medical images (X-rays, CT scans) using advanced CNN architectures.",
        tech_stack: &["Python", "PyTorch", "Medical Imaging Libraries", "DICOM", "Flask"],
        hardware: "GPU (required)",
        software: &["Python 3.8+", "PyTorch", "Pydicom", "Flask"],
        implementation_steps: &[
            "Obtain medical imaging dataset (with proper permissions)",
            "Preprocess DICOM images",
            "Implement data augmentation for medical images",
            "Design and train CNN (ResNet, DenseNet, or custom)",
            "Implement transfer learning",
            "Add explainability (Grad-CAM)",
            "Create secure API for predictions",
            "Ensure HIPAA compliance considerations",
        ],
        estimated_time: "8-10 weeks",
        job_relevance: "Very High - Healthcare AI is rapidly growing",
    },
    ProjectTemplate {
        title: "Natural Language Generation System",
        description: "Generate human-like text using GPT-style models for specific domains (news, stories, code).",
        tech_stack: &["Python", "Transformers", "GPT-2/GPT-3", "PyTorch", "FastAPI"],
        hardware: "GPU (required for training)",
        software: &["Python 3.8+", "Hugging Face Transformers", "PyTorch", "FastAPI"],
        implementation_steps: &[
            "Collect domain-specific text corpus",
            "Preprocess and tokenize text data",
            "Fine-tune pre-trained GPT model",
            "Implement text generation pipeline",
            "Add controls (temperature, top-k sampling)",
            "Create API for text generation",
            "Evaluate using BLEU, ROUGE metrics",
            "Deploy with optimization",
        ],
        estimated_time: "8-10 weeks",
        job_relevance: "Extremely High - NLP is one of the hottest AI fields",
    },
];

const CSE_BEGINNER: &[ProjectTemplate] = &[
    ProjectTemplate {
        title: "E-Commerce Website",
        description: "Build a full-stack e-commerce platform with user authentication, product catalog, and payment integration.",
        tech_stack: &["HTML", "CSS", "JavaScript", "React", "Node.js", "MongoDB"],
        hardware: "None",
        software: &["VS Code", "Node.js", "MongoDB"],
        implementation_steps: &[
            "Design database schema",
            "Set up backend API with Node.js/Express",
            "Implement user authentication (JWT)",
            "Create product catalog and search",
            "Build shopping cart functionality",
            "Integrate payment gateway (Stripe/PayPal)",
            "Design responsive frontend",
            "Deploy to cloud (Heroku/AWS)",
        ],
        estimated_time: "4-5 weeks",
        job_relevance: "High - Full-stack development is essential",
    },
    ProjectTemplate {
        title: "Task Management App",
        description: "Create a task management application with features like to-do lists, reminders, and collaboration.",
        tech_stack: &["React", "Node.js", "Express", "MongoDB", "Socket.io"],
        hardware: "None",
        software: &["VS Code", "Node.js", "MongoDB"],
        implementation_steps: &[
            "Design database schema for tasks and users",
            "Create RESTful API",
            "Implement real-time updates with WebSockets",
            "Build React frontend with components",
            "Add authentication and authorization",
            "Implement task filtering and sorting",
            "Add notification system",
            "Deploy application",
        ],
        estimated_time: "3-4 weeks",
        job_relevance: "High - Demonstrates full-stack skills",
    },
];

const CSE_MEDIUM: &[ProjectTemplate] = &[ProjectTemplate {
    title: "Distributed File Storage System",
    description: "Build a distributed file storage system similar to Dropbox with replication and fault tolerance.",
    tech_stack: &["Python", "Django", "PostgreSQL", "Redis", "Docker", "AWS S3"],
    hardware: "Multiple servers (or cloud instances)",
    software: &["Python 3.8+", "Django", "PostgreSQL", "Docker"],
    implementation_steps: &[
        "Design system architecture",
        "Implement file upload/download APIs",
        "Add file chunking and replication",
        "Implement load balancing",
        "Add encryption for security",
        "Create web interface",
        "Implement version control",
        "Add monitoring and logging",
    ],
    estimated_time: "8-10 weeks",
    job_relevance: "Very High - System design skills are crucial",
}];

const CSE_ADVANCED: &[ProjectTemplate] = &[ProjectTemplate {
    title: "Microservices Architecture Platform",
    description: "Build a scalable microservices platform with service discovery, API gateway, and container orchestration.",
    tech_stack: &["Docker", "Kubernetes", "Spring Boot", "React", "MongoDB", "Redis", "Kafka"],
    hardware: "Cloud infrastructure (AWS/GCP)",
    software: &["Docker", "Kubernetes", "Java/Spring Boot", "Node.js"],
    implementation_steps: &[
        "Design microservices architecture",
        "Implement service discovery (Consul/Eureka)",
        "Set up API Gateway",
        "Containerize services with Docker",
        "Deploy with Kubernetes",
        "Implement inter-service communication",
        "Add monitoring and logging (Prometheus, ELK)",
        "Implement CI/CD pipeline",
    ],
    estimated_time: "12-14 weeks",
    job_relevance: "Extremely High - Modern software architecture",
}];

const ECE_BEGINNER: &[ProjectTemplate] = &[ProjectTemplate {
    title: "IoT Home Automation System",
    description: "Control home appliances remotely using IoT sensors and mobile app.",
    tech_stack: &["Arduino/ESP32", "Python", "Flask", "React Native", "MQTT"],
    hardware: "Arduino/ESP32, Sensors, Relays",
    software: &["Arduino IDE", "Python 3.8+", "Flask", "MQTT Broker"],
    implementation_steps: &[
        "Set up Arduino/ESP32 with sensors",
        "Implement MQTT communication",
        "Create backend API for device control",
        "Build mobile app for control",
        "Add authentication and security",
        "Implement scheduling features",
        "Add data logging",
    ],
    estimated_time: "4-5 weeks",
    job_relevance: "High - IoT is growing rapidly",
}];

const ECE_MEDIUM: &[ProjectTemplate] = &[ProjectTemplate {
    title: "Smart Health Monitoring System",
    description: "Monitor vital signs using sensors and send alerts to doctors.",
    tech_stack: &["Arduino", "Python", "Flask", "Machine Learning", "Mobile App"],
    hardware: "Arduino, Heart Rate Sensor, Temperature Sensor, ESP32",
    software: &["Arduino IDE", "Python 3.8+", "Flask", "TensorFlow"],
    implementation_steps: &[
        "Interface sensors with Arduino",
        "Collect and transmit sensor data",
        "Implement anomaly detection using ML",
        "Create alert system",
        "Build dashboard for doctors",
        "Add data visualization",
        "Implement secure data transmission",
    ],
    estimated_time: "6-8 weeks",
    job_relevance: "Very High - Healthcare IoT is in demand",
}];

const ECE_ADVANCED: &[ProjectTemplate] = &[ProjectTemplate {
    title: "Autonomous Drone with Computer Vision",
    description: "Build a drone that can navigate autonomously using computer vision and obstacle avoidance.",
    tech_stack: &["Raspberry Pi", "Python", "OpenCV", "ROS", "Arduino", "PID Control"],
    hardware: "Drone Frame, Motors, ESC, Raspberry Pi, Camera, IMU",
    software: &["Raspberry Pi OS", "Python 3.8+", "OpenCV", "ROS"],
    implementation_steps: &[
        "Assemble drone hardware",
        "Implement flight control system",
        "Add computer vision for navigation",
        "Implement obstacle detection and avoidance",
        "Add GPS for waypoint navigation",
        "Implement PID controllers for stability",
        "Test and optimize flight performance",
    ],
    estimated_time: "12-14 weeks",
    job_relevance: "Extremely High - Robotics and autonomous systems",
}];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_tier_is_populated() {
        for category in [Category::Ai, Category::Cse, Category::Ece] {
            for difficulty in Difficulty::ALL {
                assert!(
                    !projects(category, difficulty).is_empty(),
                    "{:?}/{:?} has no projects",
                    category,
                    difficulty
                );
            }
        }
    }

    #[test]
    fn test_tier_sizes() {
        assert_eq!(all_projects(Category::Ai).count(), 9);
        assert_eq!(all_projects(Category::Cse).count(), 4);
        assert_eq!(all_projects(Category::Ece).count(), 3);
    }

    #[test]
    fn test_all_projects_order() {
        let tiers: Vec<Difficulty> = all_projects(Category::Cse).map(|(d, _)| d).collect();
        assert_eq!(
            tiers,
            vec![
                Difficulty::Beginner,
                Difficulty::Beginner,
                Difficulty::Medium,
                Difficulty::Advanced
            ]
        );
    }

    #[test]
    fn test_titles_are_unique() {
        let mut seen = HashSet::new();
        for category in [Category::Ai, Category::Cse, Category::Ece] {
            for (_, project) in all_projects(category) {
                assert!(seen.insert(project.title), "duplicate title {}", project.title);
            }
        }
    }

    #[test]
    fn test_to_idea() {
        let template = &projects(Category::Ece, Difficulty::Beginner)[0];
        let idea = template.to_idea(Difficulty::Beginner, 80.0);
        assert_eq!(idea.title, "IoT Home Automation System");
        assert_eq!(idea.difficulty, Difficulty::Beginner);
        assert_eq!(idea.success_percentage, 80.0);
        assert_eq!(idea.tech_stack.len(), 5);
        assert_eq!(idea.implementation_steps.len(), 7);
    }
}
