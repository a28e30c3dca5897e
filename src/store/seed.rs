use crate::models::lesson::{Difficulty, Lesson};
use crate::models::quiz::{Quiz, QuizQuestion};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn lessons() -> Vec<Lesson> {
    vec![
        Lesson {
            id: 1,
            title: "Introduction to Classes and Objects".into(),
            difficulty: Difficulty::Beginner,
            content: r#"
Classes are blueprints for creating objects. An object is an instance of a class.
A class defines attributes (data) and methods (functions) that objects of that class will have.

Key Points:
- A class is a template
- An object is a concrete instance created from a class
- Classes group related data and behavior together
- This helps organize code and make it reusable
        "#
                .into(),
            code_example: r#"
class Dog:
    def __init__(self, name, age):
        self.name = name
        self.age = age

    def bark(self):
        return f"{self.name} says: Woof!"

# Creating objects (instances)
dog1 = Dog("Buddy", 3)
dog2 = Dog("Max", 5)

print(dog1.bark())  # Output: Buddy says: Woof!
print(dog2.bark())  # Output: Max says: Woof!
        "#
                .into(),
            key_concepts: strings(&[
                "Class",
                "Object",
                "Instance",
                "Attributes",
                "Methods",
                "Constructor",
            ]),
        },
        Lesson {
            id: 2,
            title: "Inheritance".into(),
            difficulty: Difficulty::Intermediate,
            content: r#"
Inheritance allows a class to inherit attributes and methods from another class.
The class being inherited from is called the parent (or base) class.
The class that inherits is called the child (or derived) class.

Benefits:
- Code reusability: avoid repeating code
- Logical structure: represent real-world relationships
- Polymorphism: child classes can override parent methods
        "#
                .into(),
            code_example: r#"
class Animal:
    def __init__(self, name):
        self.name = name

    def make_sound(self):
        return "Some generic sound"

class Dog(Animal):
    def make_sound(self):
        return f"{self.name} says: Woof!"

class Cat(Animal):
    def make_sound(self):
        return f"{self.name} says: Meow!"

# Both inherit from Animal
dog = Dog("Buddy")
cat = Cat("Whiskers")

print(dog.make_sound())  # Buddy says: Woof!
print(cat.make_sound())  # Whiskers says: Meow!
        "#
                .into(),
            key_concepts: strings(&[
                "Inheritance",
                "Parent Class",
                "Child Class",
                "Override",
                "super()",
            ]),
        },
        Lesson {
            id: 3,
            title: "Encapsulation".into(),
            difficulty: Difficulty::Intermediate,
            content: r#"
Encapsulation is the bundling of data (attributes) and methods into a single unit (class).
It also involves hiding internal details from the outside world using access modifiers.

In Python:
- Public: accessible from anywhere (no prefix)
- Protected: intended for internal use (_prefix)
- Private: not accessible outside the class (__prefix)

Benefits:
- Data protection: control how data is accessed and modified
- Data hiding: expose only necessary interfaces
- Maintainability: change internal implementation without affecting external code
        "#
                .into(),
            code_example: r#"
class BankAccount:
    def __init__(self, balance):
        self.__balance = balance  # Private attribute

    def deposit(self, amount):
        if amount > 0:
            self.__balance += amount
            return f"Deposited: ${amount}"
        return "Invalid amount"

    def withdraw(self, amount):
        if 0 < amount <= self.__balance:
            self.__balance -= amount
            return f"Withdrew: ${amount}"
        return "Insufficient funds"

    def get_balance(self):
        return self.__balance

account = BankAccount(1000)
print(account.deposit(500))  # Deposited: $500
print(account.get_balance())  # 1500
# account.__balance = -1000  # Error: Cannot access private attribute
        "#
                .into(),
            key_concepts: strings(&[
                "Encapsulation",
                "Access Modifiers",
                "Private",
                "Protected",
                "Public",
                "Getters",
                "Setters",
            ]),
        },
        Lesson {
            id: 4,
            title: "Polymorphism".into(),
            difficulty: Difficulty::Advanced,
            content: r#"
Polymorphism means "many forms". It allows objects of different types to be treated as objects of a common parent type.
There are two main types: compile-time (method overloading) and runtime (method overriding).

Benefits:
- Write flexible and reusable code
- Use a single interface for different data types
- Makes code extensible and maintainable
        "#
                .into(),
            code_example: r#"
class Shape:
    def area(self):
        pass

class Circle(Shape):
    def __init__(self, radius):
        self.radius = radius

    def area(self):
        return 3.14 * self.radius ** 2

class Rectangle(Shape):
    def __init__(self, width, height):
        self.width = width
        self.height = height

    def area(self):
        return self.width * self.height

# Polymorphism in action
shapes = [Circle(5), Rectangle(4, 6)]

for shape in shapes:
    print(f"Area: {shape.area()}")  # Calls appropriate method
        "#
                .into(),
            key_concepts: strings(&[
                "Polymorphism",
                "Method Overriding",
                "Interface",
                "Dynamic Dispatch",
            ]),
        },
        Lesson {
            id: 5,
            title: "Abstraction".into(),
            difficulty: Difficulty::Advanced,
            content: r#"
Abstraction is the concept of hiding complex implementation details and showing only the necessary features.
It focuses on what an object does rather than how it does it.

In Python, we use abstract classes and abstract methods to enforce abstraction.

Benefits:
- Reduce complexity by hiding implementation details
- Define a clear interface for subclasses
- Enforce consistency across implementations
        "#
                .into(),
            code_example: r#"
from abc import ABC, abstractmethod

class Vehicle(ABC):
    @abstractmethod
    def start(self):
        pass

    @abstractmethod
    def stop(self):
        pass

class Car(Vehicle):
    def start(self):
        return "Car engine started"

    def stop(self):
        return "Car engine stopped"

class Bike(Vehicle):
    def start(self):
        return "Bike engine started"

    def stop(self):
        return "Bike engine stopped"

# Cannot instantiate abstract class
# vehicle = Vehicle()  # Error

car = Car()
print(car.start())  # Car engine started
        "#
                .into(),
            key_concepts: strings(&[
                "Abstraction",
                "Abstract Class",
                "Abstract Method",
                "ABC",
                "Interface",
            ]),
        },
    ]
}

pub fn quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            id: 1,
            lesson_id: 1,
            title: "Classes and Objects Quiz".into(),
            questions: vec![
                QuizQuestion {
                    id: 1,
                    question: "What is a class in OOP?".into(),
                    options: strings(&[
                        "An instance of an object",
                        "A blueprint for creating objects",
                        "A method of a program",
                        "A type of variable",
                    ]),
                    correct_answer: 1,
                    explanation: "A class is a blueprint or template that defines the structure and behavior for objects.".into(),
                },
                QuizQuestion {
                    id: 2,
                    question: "What is an object?".into(),
                    options: strings(&[
                        "A collection of variables",
                        "An instance of a class",
                        "A function definition",
                        "A data type",
                    ]),
                    correct_answer: 1,
                    explanation: "An object is a concrete instance created from a class. It has actual values for the attributes defined in the class.".into(),
                },
                QuizQuestion {
                    id: 3,
                    question: "What does __init__ do in a class?".into(),
                    options: strings(&[
                        "Initializes the program",
                        "Deletes an object",
                        "Constructs and initializes a new object",
                        "Returns a value",
                    ]),
                    correct_answer: 2,
                    explanation: "__init__ is the constructor method that initializes a new object when it's created.".into(),
                },
            ],
        },
        Quiz {
            id: 2,
            lesson_id: 2,
            title: "Inheritance Quiz".into(),
            questions: vec![
                QuizQuestion {
                    id: 1,
                    question: "What is inheritance?".into(),
                    options: strings(&[
                        "Passing money to children",
                        "A child class inheriting attributes and methods from a parent class",
                        "Creating multiple objects",
                        "Copying code from one file to another",
                    ]),
                    correct_answer: 1,
                    explanation: "Inheritance allows a class (child) to inherit attributes and methods from another class (parent).".into(),
                },
                QuizQuestion {
                    id: 2,
                    question: "What is the main benefit of inheritance?".into(),
                    options: strings(&[
                        "It makes code longer",
                        "It helps organize imports",
                        "Code reusability and logical structure",
                        "It slows down execution",
                    ]),
                    correct_answer: 2,
                    explanation: "Inheritance promotes code reusability and creates a logical hierarchical structure.".into(),
                },
            ],
        },
    ]
}
